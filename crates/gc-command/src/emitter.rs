//! The sequence-numbered command emitter.

use gc_core::{SpawnArea, TargetId};

use crate::{CommandError, CommandResult, RedirectionCommand, RouteChoiceCommand};

/// Builds redirection commands with a monotonically increasing sequence
/// number.
///
/// One emitter per run.  Each emission increments the counter; ids are never
/// reused within a run.  The probability vector is always one-hot: all mass
/// on the chosen corridor (a softer distribution is the engine's business,
/// via the reaction model configured at init).
#[derive(Clone, Debug)]
pub struct CommandEmitter {
    target_ids: Vec<TargetId>,
    space: Option<SpawnArea>,
    next_command_id: u32,
}

impl CommandEmitter {
    pub fn new(target_ids: Vec<TargetId>, space: Option<SpawnArea>, initial_command_id: u32) -> Self {
        Self {
            target_ids,
            space,
            next_command_id: initial_command_id,
        }
    }

    /// The id the next emitted command will carry.
    #[inline]
    pub fn next_command_id(&self) -> u32 {
        self.next_command_id
    }

    /// Build the command redirecting everyone toward `corridor`.
    ///
    /// Side effect: advances the sequence counter.
    pub fn redirect_to(&mut self, corridor: usize) -> CommandResult<RedirectionCommand> {
        let count = self.target_ids.len();
        if corridor >= count {
            return Err(CommandError::IndexOutOfRange { index: corridor, count });
        }

        let mut probability = vec![0.0; count];
        probability[corridor] = 1.0;

        let command = RedirectionCommand {
            command_id: self.next_command_id,
            command: RouteChoiceCommand {
                target_ids: self.target_ids.clone(),
                probability,
            },
            space: self.space,
        };
        self.next_command_id += 1;
        Ok(command)
    }
}
