#[cfg(test)]
mod tests {
    use crate::config::GameConfig;
    use crate::error::GameError;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    #[test]
    fn default_config_is_valid() {
        let config = GameConfig::default();
        assert_eq!(config.range_size, 100);
        assert_eq!(config.rows_per_ticket, 3);
        assert_eq!(config.numbers_per_row, 7);
        assert_eq!(config.draw_interval, Duration::from_secs(5));
        assert_eq!(config.max_tickets_per_request, 10);
        assert_eq!(config.cells_per_ticket(), 21);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn oversized_ticket_layout_is_rejected() {
        let config = GameConfig {
            range_size: 20,
            rows_per_ticket: 3,
            numbers_per_row: 7,
            ..GameConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(GameError::InvalidTicketLayout {
                cells: 21,
                range_size: 20
            })
        );
    }

    #[test]
    fn layout_filling_the_whole_range_is_valid() {
        let config = GameConfig {
            range_size: 21,
            ..GameConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zeroed_dimensions_are_rejected() {
        let zero_range = GameConfig {
            range_size: 0,
            ..GameConfig::default()
        };
        assert!(zero_range.validate().is_err());

        let zero_rows = GameConfig {
            rows_per_ticket: 0,
            ..GameConfig::default()
        };
        assert!(zero_rows.validate().is_err());

        let zero_interval = GameConfig {
            draw_interval: Duration::ZERO,
            ..GameConfig::default()
        };
        assert!(zero_interval.validate().is_err());

        let zero_bound = GameConfig {
            max_tickets_per_request: 0,
            ..GameConfig::default()
        };
        assert!(zero_bound.validate().is_err());
    }

    #[test]
    fn ticket_counts_are_clamped_at_both_ends() {
        let config = GameConfig::default();
        assert_eq!(config.clamp_ticket_count(0), 1);
        assert_eq!(config.clamp_ticket_count(-5), 1);
        assert_eq!(config.clamp_ticket_count(1), 1);
        assert_eq!(config.clamp_ticket_count(7), 7);
        assert_eq!(config.clamp_ticket_count(10), 10);
        assert_eq!(config.clamp_ticket_count(1_000_000), 10);
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let config: GameConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.range_size, 100);

        let config: GameConfig = serde_json::from_str(
            r#"{"range_size": 10, "rows_per_ticket": 1, "numbers_per_row": 3}"#,
        )
        .unwrap();
        assert_eq!(config.cells_per_ticket(), 3);
        assert!(config.validate().is_ok());
    }
}
