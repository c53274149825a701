#[cfg(test)]
mod tests {
    use std::path::Path;

    use gsf::config::GsfConfig;
    use gsf::io;
    use sawplan::io::svg::{SvgDrawOptions, plan_to_svg};
    use sawplan::io::{export, import};
    use sawplan::pack::{best_plan, pack_all};
    use sawplan::report::work_order;
    use sawplan::util::assertions;
    use test_case::test_case;

    #[test_case("../assets/demo_block.json"; "demo_block")]
    #[test_case("../assets/three_panels.json"; "three_panels")]
    #[test_case("../assets/oversize_slab.json"; "oversize_slab")]
    fn process_instance(instance_path: &str) {
        let ext_instance = io::read_instance(Path::new(instance_path)).unwrap();
        let (part_list, stock) = import(&ext_instance).unwrap();

        let total_demand: u64 = ext_instance.parts.iter().map(|p| p.demand).sum();
        assert_eq!(part_list.len() as u64, total_demand);

        let plans = pack_all(part_list.parts(), stock);
        for plan in &plans {
            assert!(assertions::plan_conserves_parts(plan, part_list.parts()));
            assert!(assertions::row_lengths_consistent(plan));

            let ext_plan = export(plan);
            assert_eq!(ext_plan.rows.len(), plan.rows.len());
            assert_eq!(ext_plan.feasible, plan.is_feasible());

            let svg = plan_to_svg(plan, SvgDrawOptions::default(), "test");
            assert!(svg.to_string().contains("stock"));

            assert!(work_order(plan).contains("work order"));
        }

        assert!(best_plan(&plans).is_some());
    }

    #[test]
    fn malformed_color_in_config_is_a_parse_error() {
        let config = r##"{"svg_draw_options": {"theme": {"stroke_width_multiplier": 2.0, "stock_fill": "#FFF"}}}"##;
        let err = serde_json::from_str::<GsfConfig>(config).unwrap_err();
        assert!(err.to_string().contains("#RRGGBB"));
    }
}
