#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use crate::{
        api::{FetchFailure, dto::HoldingsResponseDto},
        app::{calc::calculate_metrics, utils::format_amount},
        models::{Holding, HoldingRow, TodaysPnlMethod},
    };

    fn holding(symbol: &str, avg_price: Decimal, quantity: i64, ltp: Decimal, close: Decimal) -> Holding {
        Holding::new(
            symbol.to_string(),
            Some(avg_price),
            Some(quantity),
            Some(ltp),
            Some(close),
        )
    }

    fn set_sample_data() -> Vec<Holding> {
        vec![
            holding("ASHOKLEY", dec!(113.86), 3, dec!(119.10), dec!(118.85)),
            holding("HDFC", dec!(2750.95), 7, dec!(2497.20), dec!(2567.20)),
            holding("ICICIBANK", dec!(489.29), 1, dec!(624.70), dec!(627.30)),
        ]
    }

    #[test]
    fn single_holding_example() {
        let holdings = vec![holding("AAA", dec!(100), 10, dec!(120), dec!(115))];
        let formatted = calculate_metrics(&holdings, TodaysPnlMethod::Aggregate).unwrap().formatted();

        assert_eq!(formatted.total_investment(), "1000.00");
        assert_eq!(formatted.total_current_value(), "1200.00");
        assert_eq!(formatted.total_pnl(), "200.00");
        assert_eq!(formatted.todays_pnl(), "-50.00");
    }

    #[test]
    fn empty_holdings_format_to_zero() {
        for method in [TodaysPnlMethod::Aggregate, TodaysPnlMethod::PerHolding] {
            let formatted = calculate_metrics(&[], method).unwrap().formatted();

            assert_eq!(formatted.total_investment(), "0.00");
            assert_eq!(formatted.total_current_value(), "0.00");
            assert_eq!(formatted.total_pnl(), "0.00");
            assert_eq!(formatted.todays_pnl(), "0.00");
        }
    }

    #[test]
    fn sums_investment_and_current_value() {
        let metrics = calculate_metrics(&set_sample_data(), TodaysPnlMethod::Aggregate).unwrap();

        // 341.58 + 19256.65 + 489.29
        assert_eq!(metrics.total_investment().normalize(), dec!(20087.52));
        // 357.30 + 17480.40 + 624.70
        assert_eq!(metrics.total_current_value().normalize(), dec!(18462.40));
        assert_eq!(metrics.total_pnl().normalize(), dec!(-1625.12));
    }

    #[test]
    fn total_pnl_uses_unrounded_sums() {
        let holdings = vec![holding("A", dec!(0.004), 1, dec!(0.006), dec!(0))];
        let metrics = calculate_metrics(&holdings, TodaysPnlMethod::Aggregate).unwrap();
        let formatted = metrics.formatted();

        assert_eq!(formatted.total_investment(), "0.00");
        assert_eq!(formatted.total_current_value(), "0.01");
        assert_eq!(*metrics.total_pnl(), dec!(0.002));
        assert_eq!(formatted.total_pnl(), "0.00");
    }

    #[test]
    fn todays_pnl_aggregate_and_per_holding_differ() {
        let holdings = set_sample_data();

        let aggregate = calculate_metrics(&holdings, TodaysPnlMethod::Aggregate).unwrap();
        let per_holding = calculate_metrics(&holdings, TodaysPnlMethod::PerHolding).unwrap();

        // (3313.35 - 3241.00) * 11
        assert_eq!(aggregate.todays_pnl().normalize(), dec!(795.85));
        // -0.75 + 490.00 + 2.60
        assert_eq!(per_holding.todays_pnl().normalize(), dec!(491.85));
        assert_eq!(aggregate.total_pnl(), per_holding.total_pnl());
    }

    #[test]
    fn recomputing_is_idempotent() {
        let holdings = set_sample_data();

        let first = calculate_metrics(&holdings, TodaysPnlMethod::Aggregate).unwrap().formatted();
        let second = calculate_metrics(&holdings, TodaysPnlMethod::Aggregate).unwrap().formatted();

        assert_eq!(first, second);
    }

    #[test]
    fn missing_ltp_counts_as_zero() {
        let holdings = vec![
            holding("AAA", dec!(100), 10, dec!(120), dec!(115)),
            Holding::new("BBB".to_string(), Some(dec!(50)), Some(5), None, Some(dec!(48))),
        ];
        let metrics = calculate_metrics(&holdings, TodaysPnlMethod::PerHolding).unwrap();

        assert_eq!(holdings[1].current_value(), Some(Decimal::ZERO));
        assert_eq!(holdings[1].pnl(), Some(dec!(-250)));
        assert_eq!(*metrics.total_current_value(), dec!(1200));
        assert_eq!(*metrics.total_investment(), dec!(1250));
        assert_eq!(metrics.formatted().total_pnl(), "-50.00");
    }

    #[test]
    fn missing_close_counts_as_zero() {
        let holdings = vec![Holding::new("AAA".to_string(), Some(dec!(10)), Some(2), Some(dec!(12)), None)];
        let metrics = calculate_metrics(&holdings, TodaysPnlMethod::Aggregate).unwrap();

        assert_eq!(metrics.formatted().todays_pnl(), "-24.00");
    }

    #[test]
    fn single_row_pnl_matches_total_pnl() {
        let holdings = vec![holding("XYZ", dec!(33.333), 3, dec!(41.117), dec!(40))];
        let metrics = calculate_metrics(&holdings, TodaysPnlMethod::Aggregate).unwrap();
        let row = HoldingRow::from_holding(0, &holdings[0]);

        assert_eq!(row.pnl(), metrics.formatted().total_pnl());
    }

    #[test]
    fn format_amount_rounds_half_away_from_zero() {
        assert_eq!(format_amount(dec!(1.005)), "1.01");
        assert_eq!(format_amount(dec!(-1.005)), "-1.01");
        assert_eq!(format_amount(dec!(2.5)), "2.50");
        assert_eq!(format_amount(dec!(1000)), "1000.00");
        assert_eq!(format_amount(dec!(-0.001)), "0.00");
    }

    #[test]
    fn oversized_amounts_fail_instead_of_panicking() {
        let body = r#"{ "userHolding": [
            { "symbol": "BIG", "avgPrice": 1e20, "quantity": 10000000000, "ltp": 1e20, "close": 1e20 }
        ] }"#;
        let holdings = serde_json::from_str::<HoldingsResponseDto>(body)
            .unwrap()
            .into_holdings();

        assert_eq!(holdings[0].investment(), None);
        for method in [TodaysPnlMethod::Aggregate, TodaysPnlMethod::PerHolding] {
            let err = calculate_metrics(&holdings, method).unwrap_err();
            assert!(matches!(err, FetchFailure::Overflow(ref what) if what == "holding BIG"));
        }
    }

    #[test]
    fn overflowing_aggregate_todays_pnl_fails() {
        let max = Decimal::MAX;
        let holdings = vec![
            Holding::new("A".to_string(), Some(dec!(1)), Some(1), Some(dec!(1)), Some(max)),
            Holding::new("B".to_string(), Some(dec!(1)), Some(1), Some(dec!(1)), Some(dec!(0))),
        ];

        let err = calculate_metrics(&holdings, TodaysPnlMethod::Aggregate).unwrap_err();

        assert!(matches!(err, FetchFailure::Overflow(ref what) if what == "today's P&L"));
        // Per holding the terms stay in range: (MAX - 1) + (-1).
        assert!(calculate_metrics(&holdings, TodaysPnlMethod::PerHolding).is_ok());
    }
}
