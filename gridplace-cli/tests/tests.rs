#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use float_cmp::approx_eq;
    use gridplace::entities::Snapshot;
    use gridplace::io::{export, import};
    use gridplace::place::GridPlacer;
    use gridplace_cli::config::CliConfig;
    use gridplace_cli::io;
    use gridplace_cli::io::layout_to_svg::layout_to_svg;
    use gridplace_cli::io::output::PlacementOutput;
    use gridplace_cli::io::svg_util::{SvgDrawOptions, SvgLayoutThemes};
    use test_case::test_case;

    const REQUEST: &str = r#"{
        "parts": [
            {"refdes": "R1", "kind": "resistor"},
            {"refdes": "U1", "kind": "ic", "part_id": "ATMEGA328P@avr"},
            {"refdes": "C1", "kind": "capacitor", "anchor_refdes": "U1", "dy": 5},
            {"refdes": "D1", "kind": "Diode", "rotation": 92.5}
        ],
        "snapshot": {
            "source": "ulp",
            "components": [
                {"refdes": "J1", "kind": "connector", "x": 200.0, "y": 0.0}
            ]
        }
    }"#;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("gridplace_cli_{name}_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn partial_config_file_keeps_defaults() {
        let dir = scratch_dir("config");
        let path = dir.join("config.json");
        fs::write(&path, r#"{"placer": {"sheet_max_x": 250.0}}"#).unwrap();

        let config = io::read_config(&path).unwrap();
        assert!(approx_eq!(f64, config.placer.sheet_max_x, 250.0));
        assert!(approx_eq!(f64, config.placer.grid_step, 10.0));
        assert!(approx_eq!(f64, config.placer.margin, 5.0));
        assert!(approx_eq!(f64, config.placer.wrap_y_step, 50.0));
        assert_eq!(config.svg_draw_options, SvgDrawOptions::default());

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn malformed_request_is_an_error() {
        let dir = scratch_dir("malformed");
        let path = dir.join("request.json");
        fs::write(&path, r#"{"parts": [{"kind": "resistor"}]}"#).unwrap();
        assert!(io::read_request(&path).is_err());
        assert!(io::read_request(&dir.join("missing.json")).is_err());
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn solution_file_contains_placements_and_config() {
        let dir = scratch_dir("solution");
        let request_path = dir.join("request.json");
        fs::write(&request_path, REQUEST).unwrap();

        let config = CliConfig::default();
        let request = io::read_request(&request_path).unwrap();
        let parts = import::import_parts(&request.parts);
        let snapshot = request.snapshot.as_ref().map(import::import_snapshot);
        let outcome = GridPlacer::new(config.placer)
            .unwrap()
            .place_all(&parts, snapshot.as_ref())
            .unwrap();

        let output = PlacementOutput {
            result: export::export(&outcome),
            config: config.placer,
        };
        let solution_path = dir.join("sol_request.json");
        io::write_json(&output, &solution_path).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&solution_path).unwrap()).unwrap();
        // J1 ends at 265 with margin, new parts start six columns further
        assert_eq!(written["placements"]["R1"]["x"], 320.0);
        assert_eq!(written["placements"]["U1"]["x"], 360.0);
        assert_eq!(written["placements"]["C1"]["x"], 360.0);
        assert_eq!(written["placements"]["C1"]["y"], 50.0);
        assert_eq!(written["placements"]["D1"]["x"], 430.0);
        assert_eq!(written["placements"]["D1"]["rotation"], 90);
        assert_eq!(written["placements"]["D1"]["layer"], "Top");
        assert_eq!(written["config"]["sheet_max_x"], 500.0);
        assert!(written.get("diagnostics").is_none());

        let read_back: PlacementOutput =
            serde_json::from_str(&fs::read_to_string(&solution_path).unwrap()).unwrap();
        assert_eq!(read_back, output);

        fs::remove_dir_all(dir).unwrap();
    }

    #[test_case(SvgLayoutThemes::EarthTones, true; "earth tones with decorations")]
    #[test_case(SvgLayoutThemes::Gray, false; "gray without decorations")]
    fn svg_preview_contains_every_component(theme: SvgLayoutThemes, decorations: bool) {
        let dir = scratch_dir(&format!("svg_{decorations}"));
        let request: gridplace::io::ext_repr::ExtPlacementRequest =
            serde_json::from_str(REQUEST).unwrap();
        let parts = import::import_parts(&request.parts);
        let snapshot: Option<Snapshot> = request.snapshot.as_ref().map(import::import_snapshot);
        let config = CliConfig::default();
        let outcome = GridPlacer::new(config.placer)
            .unwrap()
            .place_all(&parts, snapshot.as_ref())
            .unwrap();

        let options = SvgDrawOptions {
            theme,
            margins: decorations,
            labels: decorations,
            sheet_limit: decorations,
        };
        let document = layout_to_svg(snapshot.as_ref(), &parts, &outcome, &config.placer, options);
        let svg_path = dir.join("sol_request.svg");
        io::write_svg(&document, &svg_path).unwrap();

        let svg = fs::read_to_string(&svg_path).unwrap();
        for id in ["existing_J1", "placed_R1", "placed_U1", "placed_C1", "placed_D1"] {
            assert!(svg.contains(id), "missing {id} in svg");
        }
        assert_eq!(svg.contains("stroke-dasharray"), decorations);

        fs::remove_dir_all(dir).unwrap();
    }
}
