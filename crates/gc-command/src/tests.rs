//! Unit tests for the command wire format and emitter.

#[cfg(test)]
mod emitter {
    use gc_core::TargetId;

    use crate::{CommandEmitter, CommandError};

    fn targets() -> Vec<TargetId> {
        vec![TargetId(11), TargetId(21), TargetId(31), TargetId(41), TargetId(51)]
    }

    #[test]
    fn probability_vector_is_one_hot() {
        let mut emitter = CommandEmitter::new(targets(), None, 111);
        let cmd = emitter.redirect_to(2).unwrap();
        assert_eq!(cmd.command.probability, vec![0.0, 0.0, 1.0, 0.0, 0.0]);
        assert_eq!(cmd.command.target_ids, targets());
    }

    #[test]
    fn command_ids_increase_without_gaps() {
        let mut emitter = CommandEmitter::new(targets(), None, 111);
        let ids: Vec<u32> = (0..5)
            .map(|i| emitter.redirect_to(i).unwrap().command_id)
            .collect();
        assert_eq!(ids, vec![111, 112, 113, 114, 115]);
        assert_eq!(emitter.next_command_id(), 116);
    }

    #[test]
    fn out_of_range_corridor_is_rejected() {
        let mut emitter = CommandEmitter::new(targets(), None, 111);
        let err = emitter.redirect_to(5).unwrap_err();
        assert!(matches!(err, CommandError::IndexOutOfRange { index: 5, count: 5 }));
        // A rejected emission must not consume a sequence number.
        assert_eq!(emitter.next_command_id(), 111);
    }
}

#[cfg(test)]
mod wire {
    use gc_core::{SpawnArea, TargetId};

    use crate::{CommandEmitter, RedirectionCommand};

    fn spawn_area() -> SpawnArea {
        SpawnArea { x: 0.5, y: 0.5, width: 5.0, height: 15.0 }
    }

    #[test]
    fn encode_uses_the_wire_field_names() {
        let mut emitter = CommandEmitter::new(
            vec![TargetId(11), TargetId(21)],
            Some(spawn_area()),
            111,
        );
        let json = emitter.redirect_to(1).unwrap().encode().unwrap();

        assert!(json.contains("\"commandId\":111"));
        assert!(json.contains("\"targetIds\":[11,21]"));
        assert!(json.contains("\"probability\":[0.0,1.0]"));
        assert!(json.contains("\"space\":{\"x\":0.5,\"y\":0.5,\"width\":5.0,\"height\":15.0}"));
    }

    #[test]
    fn space_is_omitted_when_absent() {
        let mut emitter = CommandEmitter::new(vec![TargetId(11)], None, 1);
        let json = emitter.redirect_to(0).unwrap().encode().unwrap();
        assert!(!json.contains("space"));
    }

    #[test]
    fn round_trip_preserves_targets_and_probability() {
        let mut emitter = CommandEmitter::new(
            vec![TargetId(11), TargetId(21), TargetId(31), TargetId(41), TargetId(51)],
            Some(spawn_area()),
            111,
        );
        let cmd = emitter.redirect_to(3).unwrap();
        let parsed = RedirectionCommand::decode(&cmd.encode().unwrap()).unwrap();

        assert_eq!(parsed, cmd);
        assert_eq!(parsed.command.probability.len(), 5);
        let ones = parsed.command.probability.iter().filter(|&&p| p == 1.0).count();
        let zeros = parsed.command.probability.iter().filter(|&&p| p == 0.0).count();
        assert_eq!((ones, zeros), (1, 4));
    }

    #[test]
    fn decode_rejects_malformed_documents() {
        assert!(RedirectionCommand::decode("{\"commandId\": true}").is_err());
    }
}
