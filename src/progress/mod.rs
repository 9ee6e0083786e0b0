mod responses;

pub use self::responses::{GameProgressResponse, RawGameEvent};

use crate::runtime::{AchievementRuntime, RuntimeError};

quick_error! {
    #[derive(Debug)]
    pub enum ProgressError {
        Json(err: serde_json::Error) {
            from()
            display("JSON parsing error: {}", err)
            source(err)
        }
        MissingField(name: &'static str) {
            display("Response missing field: {}", name)
        }
        MissingEventField(index: usize, name: &'static str) {
            display("Event {} missing field: {}", index, name)
        }
        Activation(id: u32, err: RuntimeError) {
            display("Failed to activate event {}: {}", id, err)
            source(err)
        }
        RichPresence(err: RuntimeError) {
            display("Failed to activate rich presence: {}", err)
            source(err)
        }
    }
}

/// A validated entry of the `Events` array. Borrows its macro text from the
/// parsed response, so it only lives as long as one parse call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameEvent<'a> {
    pub id: u32,
    pub definition: &'a str,
}

fn collect_events<'a>(raw: &'a [RawGameEvent]) -> Result<Vec<GameEvent<'a>>, ProgressError> {
    let mut events = Vec::with_capacity(raw.len());
    for (index, entry) in raw.iter().enumerate() {
        let id = match entry.id {
            Some(id) => id,
            None => {
                error!("Event {} has no Id", index);
                return Err(ProgressError::MissingEventField(index, "Id"));
            }
        };
        let definition = match entry.definition {
            Some(ref d) => d.as_str(),
            None => {
                error!("Event {} (id {}) has no Macro", index, id);
                return Err(ProgressError::MissingEventField(index, "Macro"));
            }
        };
        events.push(GameEvent { id, definition });
    }

    Ok(events)
}

/// Parses a game-progress payload and activates its triggers in `runtime`.
///
/// `Progress` and `Events` are both required; an empty `Events` array is a
/// valid zero-event payload, a missing `Events` key is not. The whole events
/// array is validated before the first activation call, so a malformed entry
/// anywhere in the batch leaves the runtime untouched. An activation
/// rejected partway through the commit loop still aborts the call, but the
/// events already activated stay registered (the runtime has no deactivate
/// operation); callers must discard the entire response on any error.
///
/// Events are activated in array order, then the rich-presence script once.
/// A rich-presence rejection is reported with the runtime's own code so it
/// stays distinguishable from parse and schema failures.
pub fn parse_game_progress<R: AchievementRuntime>(
    json: &str,
    runtime: &mut R,
) -> Result<(), ProgressError> {
    debug!("Game progress response: {}", json);

    let response: GameProgressResponse = serde_json::from_str(json)?;

    let raw_events = response
        .events
        .as_ref()
        .ok_or(ProgressError::MissingField("Events"))?;
    let progress = response
        .progress
        .as_ref()
        .ok_or(ProgressError::MissingField("Progress"))?;

    // Validate the whole batch before the first activation call.
    let events = collect_events(raw_events)?;

    info!("Activating {} game events", events.len());
    for event in &events {
        if let Err(e) = runtime.activate_achievement(event.id, event.definition) {
            error!("Failed to activate event {}: {}", event.id, e);
            return Err(ProgressError::Activation(event.id, e));
        }
        debug!("Activated event {}", event.id);
    }

    match runtime.activate_rich_presence(progress) {
        Ok(()) => {
            info!("Activated rich presence");
            Ok(())
        }
        Err(e) => {
            error!("Failed to activate rich presence: {}", e);
            Err(ProgressError::RichPresence(e))
        }
    }
}
