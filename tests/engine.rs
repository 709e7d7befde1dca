use approx::assert_abs_diff_eq;
use whr_toolbox::whr::{
    self,
    calculator::{self, PAYBACK_NEVER},
    insights, optimizer, FuelSpec, FuelType, HeatExchangerType, PlantInput, ScenarioLabel,
};

fn reference_plant() -> PlantInput {
    PlantInput {
        flue_temp_in: 300.0,
        flue_temp_out: 150.0,
        flow_rate: 50_000.0,
        fuel_type: FuelType::NaturalGas.into(),
        fuel_cost: 0.05,
        operating_hours: 8000.0,
        installation_cost: 2_000_000.0,
        steam_demand: Some(5000.0),
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[test]
fn reference_plant_metrics_follow_formulas() {
    let res = whr::analyze(&reference_plant());

    assert_abs_diff_eq!(res.heat_recovered_kw, 2083.33, epsilon = 1e-9);
    let steam = round2(2083.33 * 3600.0 / 2257.0);
    assert_abs_diff_eq!(res.steam_saved_kg_hr, steam, epsilon = 1e-9);
    let savings = round2(steam * 8000.0 * 0.05);
    assert_abs_diff_eq!(res.annual_savings, savings, epsilon = 1e-6);
    assert_abs_diff_eq!(res.payback_years, 1.50, epsilon = 1e-9);
    let co2 = round2(steam * 8000.0 * 2.75 / 1000.0);
    assert_abs_diff_eq!(res.co2_reduction_tons, co2, epsilon = 1e-6);
    assert_abs_diff_eq!(res.efficiency_gain_pct, 50.0, epsilon = 1e-9);

    assert!(!res.recommendation.dew_point_warning);
    assert!(res.recommendation.warning_message.is_none());
    assert_eq!(
        res.recommendation.heat_exchanger_type,
        HeatExchangerType::Economizer
    );
    assert_abs_diff_eq!(res.recommendation.optimal_exit_temp, 150.0);
}

#[test]
fn energy_breakdown_matches_efficiency() {
    let res = whr::analyze(&reference_plant());
    assert_abs_diff_eq!(res.energy.energy_recovered_pct, 50.0, epsilon = 1e-9);
    assert_abs_diff_eq!(res.energy.energy_lost_pct, 50.0, epsilon = 1e-9);
    assert_abs_diff_eq!(
        res.energy.energy_recovered_pct,
        res.efficiency_gain_pct,
        epsilon = 1e-9
    );
}

#[test]
fn heat_recovered_is_positive_for_cooling_gas() {
    for (flow, t_in, t_out) in [(360.0, 60.0, 59.0), (12_345.0, 420.0, 180.5), (499_999.0, 799.0, 31.0)] {
        let q = calculator::heat_recovered(flow, t_in, t_out);
        assert!(q > 0.0, "flow={flow} t_in={t_in} t_out={t_out}");
        assert_abs_diff_eq!(q, round2(flow * (t_in - t_out) / 3600.0), epsilon = 1e-9);
    }
}

#[test]
fn steam_follows_latent_heat() {
    let q = calculator::heat_recovered(20_000.0, 300.0, 150.0);
    assert_abs_diff_eq!(
        calculator::steam_saved(q),
        round2(q * 3600.0 / 2257.0),
        epsilon = 1e-9
    );
}

#[test]
fn payback_sentinel_whenever_savings_non_positive() {
    for cost in [1.0, 2_000_000.0, 0.0] {
        assert_eq!(calculator::payback(cost, 0.0), PAYBACK_NEVER);
        assert_eq!(calculator::payback(cost, -10.0), PAYBACK_NEVER);
    }
}

#[test]
fn bagasse_has_no_direct_co2() {
    let bagasse = FuelSpec::from("Bagasse");
    for (steam, hours) in [(1.0, 1.0), (3322.99, 8000.0), (1e6, 8760.0)] {
        assert_eq!(calculator::co2_reduction(steam, hours, &bagasse), 0.0);
    }

    let res = whr::analyze(&PlantInput {
        fuel_type: bagasse,
        ..reference_plant()
    });
    assert_eq!(res.co2_reduction_tons, 0.0);
    assert_eq!(res.climate_impact.equivalent_trees_planted, 0);
    assert!(res.ai_summary.contains("carbon-neutral"));
}

#[test]
fn unknown_fuel_counts_as_zero_emission() {
    let res = whr::analyze(&PlantInput {
        fuel_type: FuelSpec::from("Hydrogen"),
        ..reference_plant()
    });
    assert_eq!(res.co2_reduction_tons, 0.0);
    assert!(res.heat_recovered_kw > 0.0);
}

#[test]
fn exchanger_boundaries_are_strict() {
    assert_eq!(
        optimizer::recommend_heat_exchanger(300.0, 150.0).heat_exchanger_type,
        HeatExchangerType::Economizer
    );
    assert_eq!(
        optimizer::recommend_heat_exchanger(300.1, 150.0).heat_exchanger_type,
        HeatExchangerType::WasteHeatBoiler
    );
    assert_eq!(
        optimizer::recommend_heat_exchanger(230.0, 150.0).heat_exchanger_type,
        HeatExchangerType::AirPreheater
    );
    assert_eq!(
        optimizer::recommend_heat_exchanger(230.5, 150.0).heat_exchanger_type,
        HeatExchangerType::Economizer
    );
}

#[test]
fn low_outlet_raises_dew_point_warning() {
    let rec = optimizer::recommend_heat_exchanger(300.0, 110.0);
    assert!(rec.dew_point_warning);
    assert!(rec.warning_message.as_deref().unwrap().contains("110.0"));
    assert_abs_diff_eq!(rec.optimal_exit_temp, 130.0);
}

#[test]
fn scenarios_step_down_until_floored() {
    for t_out in [300.0, 160.0, 140.0, 126.0, 121.0, 100.0] {
        let input = PlantInput {
            flue_temp_in: 450.0,
            flue_temp_out: t_out,
            ..reference_plant()
        };
        let [base, improved, optimized] = optimizer::generate_scenarios(&input);
        assert_eq!(base.label, ScenarioLabel::Base);
        assert_eq!(improved.label, ScenarioLabel::Improved);
        assert_eq!(optimized.label, ScenarioLabel::Optimized);

        if improved.flue_temp_out > 120.0 {
            assert!(improved.flue_temp_out <= base.flue_temp_out - 15.0);
        } else {
            assert_eq!(improved.flue_temp_out, 120.0);
        }
        if optimized.flue_temp_out > 125.0 {
            assert!(optimized.flue_temp_out <= improved.flue_temp_out - 15.0);
        } else {
            assert_eq!(optimized.flue_temp_out, 125.0);
        }

        assert_abs_diff_eq!(improved.installation_cost, 2_200_000.0, epsilon = 1e-6);
        assert_abs_diff_eq!(optimized.installation_cost, 2_500_000.0, epsilon = 1e-6);
    }
}

#[test]
fn base_scenario_matches_headline_metrics() {
    let res = whr::analyze(&reference_plant());
    assert_eq!(res.scenarios[0], res.base());
}

#[test]
fn roi_accumulates_savings() {
    let res = whr::analyze(&reference_plant());
    let expected: Vec<f64> = (1..=5)
        .map(|n| round2((res.annual_savings * n as f64 - 2_000_000.0) / 2_000_000.0 * 100.0))
        .collect();
    assert_eq!(res.roi_5yr.to_vec(), expected);
    assert!(res.roi_5yr[0] < 0.0);
    assert!(res.roi_5yr[4] > 0.0);
    assert!(res.roi_5yr.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn climate_zero_guard() {
    let zero = optimizer::climate_equivalence(0.0);
    assert_eq!(zero.equivalent_trees_planted, 0);
    assert_eq!(zero.equivalent_cars_removed, 0);
    assert_eq!(zero.total_co2_avoided_tons, 0.0);

    let some = optimizer::climate_equivalence(100.0);
    assert_abs_diff_eq!(some.total_co2_avoided_tons, 500.0);
    assert_eq!(some.equivalent_trees_planted, (500.0_f64 / 0.022).floor() as u64);
    assert_eq!(some.equivalent_cars_removed, 108);
}

#[test]
fn analysis_is_repeatable() {
    let input = reference_plant();
    let a = whr::analyze(&input);
    let b = whr::analyze(&input);
    assert_eq!(a, b);
    assert_eq!(a.ai_summary, b.ai_summary);
}

#[test]
fn concurrent_callers_agree() {
    let input = reference_plant();
    let expected = whr::analyze(&input);
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let input = input.clone();
            std::thread::spawn(move || whr::analyze(&input))
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), expected);
    }
}

#[test]
fn summary_mentions_fuel_and_equipment() {
    let res = whr::analyze(&reference_plant());
    assert!(res.ai_summary.contains("natural gas-fired"));
    assert!(res.ai_summary.contains("Economizer"));
    assert!(res.ai_summary.contains("substantial"));
    assert!(res.ai_summary.contains("highly attractive payback of 1.5 years"));
}

#[test]
fn steam_demand_coverage_is_reported() {
    let res = whr::analyze(&reference_plant());
    let cov = res.steam_demand_coverage_pct.unwrap();
    assert_abs_diff_eq!(cov, round2(res.steam_saved_kg_hr / 5000.0 * 100.0), epsilon = 1e-9);

    let none = whr::analyze(&PlantInput {
        steam_demand: None,
        ..reference_plant()
    });
    assert!(none.steam_demand_coverage_pct.is_none());
}

#[test]
fn json_uses_external_field_names() {
    let res = whr::analyze(&reference_plant());
    let v: serde_json::Value = serde_json::to_value(&res).unwrap();
    assert!(v.get("heat_recovered_kW").is_some());
    assert!(v.get("energy_recovered_pct").is_some());
    assert_eq!(v["scenarios"][1]["label"], "Improved Case");
    assert_eq!(v["recommendation"]["heat_exchanger_type"], "Economizer");
}

#[test]
fn validation_rejects_out_of_range_fields() {
    assert!(whr::validate(&reference_plant()).is_ok());
    let bad = [
        PlantInput { flue_temp_in: 50.0, ..reference_plant() },
        PlantInput { flue_temp_out: 600.0, ..reference_plant() },
        PlantInput { flow_rate: 0.0, ..reference_plant() },
        PlantInput { fuel_cost: 1000.0, ..reference_plant() },
        PlantInput { operating_hours: 8761.0, ..reference_plant() },
        PlantInput { installation_cost: 0.0, ..reference_plant() },
        PlantInput { flow_rate: f64::NAN, ..reference_plant() },
    ];
    for input in bad {
        assert!(whr::validate(&input).is_err(), "{input:?}");
    }
    assert!(whr::validate(&PlantInput {
        operating_hours: 8760.0,
        ..reference_plant()
    })
    .is_ok());
}

#[test]
fn dew_point_note_only_when_warned() {
    let cold = whr::analyze(&PlantInput {
        flue_temp_out: 110.0,
        ..reference_plant()
    });
    assert!(cold.recommendation.dew_point_warning);
    assert!(cold.ai_summary.ends_with(insights::DEW_POINT_NOTE));

    let warm = whr::analyze(&reference_plant());
    assert!(!warm.ai_summary.contains(insights::DEW_POINT_NOTE.trim()));
}

#[test]
fn summary_fragments_keep_their_order() {
    let res = whr::analyze(&reference_plant());
    let s = &res.ai_summary;
    let fragments = [
        "natural gas-fired",
        "2,083.3 kW",
        "3,323.0 kg/hr",
        "substantial annual fuel savings of $1,329,196",
        "highly attractive payback of 1.5 years",
        "metric tons of CO",
        "a Economizer",
        "50.0% improvement",
    ];
    let positions: Vec<usize> = fragments
        .iter()
        .map(|f| s.find(f).unwrap_or_else(|| panic!("missing {f:?} in {s}")))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
}
