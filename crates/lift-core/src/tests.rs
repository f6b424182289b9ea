//! Unit tests for lift-core primitives.

#[cfg(test)]
mod ids {
    use crate::{CabinId, RequestId};

    #[test]
    fn index_roundtrip() {
        let id = CabinId(3);
        assert_eq!(id.index(), 3);
        assert_eq!(CabinId::try_from(3usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(CabinId(0) < CabinId(1));
        assert!(RequestId(100) > RequestId(99));
    }

    #[test]
    fn display() {
        assert_eq!(CabinId(7).to_string(), "CabinId(7)");
        assert_eq!(RequestId(2).to_string(), "RequestId(2)");
    }
}

#[cfg(test)]
mod command {
    use crate::{CabinCommand, CoreError, Direction, render_commands};

    #[test]
    fn direction_helpers() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::toward(1, 4), Direction::Up);
        assert_eq!(Direction::toward(4, 1), Direction::Down);
        // Same floor is treated as downward.
        assert_eq!(Direction::toward(2, 2), Direction::Down);
        assert!(Direction::Up.is_beyond(2, 3));
        assert!(!Direction::Up.is_beyond(2, 2));
        assert!(Direction::Down.is_beyond(2, -1));
    }

    #[test]
    fn direction_parses_case_insensitive() {
        assert_eq!("UP".parse::<Direction>().unwrap(), Direction::Up);
        assert_eq!(" down ".parse::<Direction>().unwrap(), Direction::Down);
        assert!(matches!("sideways".parse::<Direction>(), Err(CoreError::Parse(_))));
    }

    #[test]
    fn command_text_roundtrip() {
        for command in CabinCommand::ALL {
            assert_eq!(command.to_string().parse::<CabinCommand>().unwrap(), command);
        }
        assert_eq!(CabinCommand::OpenDown.to_string(), "OPEN_DOWN");
        assert!("OPEN".parse::<CabinCommand>().is_err());
    }

    #[test]
    fn command_classes() {
        assert!(CabinCommand::OpenUp.is_open());
        assert!(!CabinCommand::Close.is_open());
        assert!(CabinCommand::Down.is_move());
        assert!(!CabinCommand::Nothing.is_move());
        assert_eq!(Direction::Down.move_command(), CabinCommand::Down);
        assert_eq!(Direction::Up.open_command(), CabinCommand::OpenUp);
    }

    #[test]
    fn render_one_per_line() {
        let text = render_commands(&[CabinCommand::Up, CabinCommand::Nothing]);
        assert_eq!(text, "UP\nNOTHING\n");
        assert_eq!(render_commands(&[]), "");
    }
}

#[cfg(test)]
mod config {
    use crate::{CoreError, FleetConfig, ResetParams};

    #[test]
    fn defaults_are_valid() {
        let c = FleetConfig::default();
        assert_eq!((c.lower_floor, c.higher_floor, c.capacity, c.cabin_count), (0, 5, 5, 2));
        assert!(c.validate().is_ok());
        assert_eq!(c.span(), 5);
    }

    #[test]
    fn inverted_bounds_rejected() {
        let c = FleetConfig { lower_floor: 3, higher_floor: 3, ..FleetConfig::default() };
        assert!(matches!(c.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn zero_capacity_rejected() {
        let c = FleetConfig { capacity: 0, ..FleetConfig::default() };
        assert!(c.validate().is_err());
    }

    #[test]
    fn start_floor_clamped() {
        let above = FleetConfig { lower_floor: 2, higher_floor: 9, ..FleetConfig::default() };
        assert_eq!(above.start_floor(), 2);
        let below = FleetConfig { lower_floor: -9, higher_floor: -2, ..FleetConfig::default() };
        assert_eq!(below.start_floor(), -2);
        let around = FleetConfig { lower_floor: -5, higher_floor: 35, ..FleetConfig::default() };
        assert_eq!(around.start_floor(), 0);
    }

    #[test]
    fn reset_params_keep_omitted_fields() {
        let base = FleetConfig::default();
        let next = ResetParams::new().higher_floor(12).cabin_count(4).apply(&base).unwrap();
        assert_eq!(next.lower_floor, 0);
        assert_eq!(next.higher_floor, 12);
        assert_eq!(next.capacity, 5);
        assert_eq!(next.cabin_count, 4);
    }

    #[test]
    fn reset_params_validate_result() {
        let base = FleetConfig::default();
        assert!(ResetParams::new().floors(4, 1).apply(&base).is_err());
        assert!(ResetParams::new().lower_floor(5).apply(&base).is_err());
    }
}

#[cfg(test)]
mod time {
    use crate::Tick;

    #[test]
    fn tick_arithmetic() {
        assert_eq!(Tick(10).next(), Tick(11));
        assert_eq!(Tick(10) + 5, Tick(15));
        assert_eq!(Tick(15).since(Tick(10)), 5);
        assert_eq!(Tick(3).since(Tick(10)), 0);
        assert_eq!(Tick(4).to_string(), "T4");
    }
}
