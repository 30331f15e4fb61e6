use matrix_trend_chart::ChartError;
use matrix_trend_chart::api::{
    CHART_CONFIG_JSON_SCHEMA_V1, ChartConfig, ChartConfigBuilder, ChartConfigJsonContractV1,
    ChartOptionsConfig,
};
use matrix_trend_chart::core::{ChartPayload, Label, Viewport};
use matrix_trend_chart::render::SurfaceHandle;
use serde_json::Value;

fn scenario_config() -> ChartConfig {
    let builder = ChartConfigBuilder::new(ChartOptionsConfig::new()).expect("builder");
    let surface = SurfaceHandle::new("myBarChart", Viewport::new(800, 400)).expect("surface");
    let payload = ChartPayload::new([0, 1, 2, 3], "Matrix Trend", [10.0, 12.5, 9.0, 15.0]);
    let fill = builder.derive_fill_gradient(&surface).expect("gradient");
    builder.build(&payload, fill).expect("build")
}

#[test]
fn config_json_uses_runtime_key_names() {
    let json = scenario_config().to_json_pretty().expect("json");
    let value: Value = serde_json::from_str(&json).expect("parse");

    assert_eq!(value["type"], "line");
    assert_eq!(value["data"]["labels"], serde_json::json!([0, 1, 2, 3]));

    let dataset = &value["data"]["datasets"][0];
    assert_eq!(dataset["label"], "Matrix Trend");
    assert_eq!(dataset["data"], serde_json::json!([10.0, 12.5, 9.0, 15.0]));
    assert_eq!(dataset["borderColor"], "#007bff");
    assert_eq!(dataset["borderWidth"], 2.0);
    assert_eq!(dataset["fill"], true);
    assert_eq!(dataset["tension"], 0.3);
    assert_eq!(dataset["pointRadius"], 3.0);
    assert_eq!(dataset["pointBackgroundColor"], "#007bff");
    assert_eq!(
        dataset["backgroundColor"]["stops"][0]["color"],
        "rgba(0, 123, 255, 0.5)"
    );
    assert_eq!(
        dataset["backgroundColor"]["stops"][1]["color"],
        "rgba(0, 123, 255, 0)"
    );

    let options = &value["options"];
    assert_eq!(options["responsive"], true);
    assert_eq!(options["maintainAspectRatio"], false);
    assert_eq!(options["plugins"]["legend"]["display"], true);
    assert_eq!(options["plugins"]["legend"]["position"], "top");
    assert_eq!(options["plugins"]["title"]["font"]["size"], 16.0);
    assert_eq!(options["scales"]["y"]["beginAtZero"], false);
    assert_eq!(options["scales"]["y"]["grid"]["color"], "rgba(0, 0, 0, 0.05)");
    assert_eq!(options["scales"]["x"]["grid"]["display"], false);
    assert!(options["scales"]["x"].get("beginAtZero").is_none());
}

#[test]
fn config_contract_v1_round_trips() {
    let config = scenario_config();
    let json = config.to_json_contract_v1_pretty().expect("contract json");
    let contract: ChartConfigJsonContractV1 = serde_json::from_str(&json).expect("parse");

    assert_eq!(contract.schema_version, CHART_CONFIG_JSON_SCHEMA_V1);
    assert_eq!(contract.config, config);
}

#[test]
fn payload_parses_from_injected_json() {
    let payload = ChartPayload::from_json_str(
        r#"{"labels": ["0", "1"], "dataset_label": "Nilai", "data_values": [1, 2.5]}"#,
    )
    .expect("payload");

    assert_eq!(payload.labels, vec![Label::from("0"), Label::from("1")]);
    assert_eq!(payload.dataset_label, "Nilai");
    assert_eq!(payload.data_values, vec![1.0, 2.5]);
}

#[test]
fn payload_missing_fields_is_invalid_data() {
    let err = ChartPayload::from_json_str(r#"{"labels": []}"#).expect_err("must fail");
    assert!(err.to_string().contains("failed to parse chart payload"));
}

#[test]
fn options_accept_bare_and_versioned_forms() {
    let bare = ChartOptionsConfig::from_json_compat_str(
        r#"{"element_id": "trend", "maintain_aspect_ratio": true}"#,
    )
    .expect("bare options");
    assert_eq!(bare.element_id, "trend");
    assert!(bare.maintain_aspect_ratio);
    assert!(bare.responsive);
    assert_eq!(bare.text, ChartOptionsConfig::new().text);

    let versioned_json = bare.to_json_contract_v1_pretty().expect("contract");
    let versioned = ChartOptionsConfig::from_json_compat_str(&versioned_json).expect("versioned");
    assert_eq!(versioned, bare);
}

#[test]
fn options_reject_unknown_schema_version() {
    let err = ChartOptionsConfig::from_json_compat_str(r#"{"schema_version": 9, "options": {}}"#)
        .expect_err("must reject");
    assert!(err.to_string().contains("unsupported chart options schema version"));
}

#[test]
fn options_reject_bad_css_colors() {
    let result = ChartOptionsConfig::from_json_compat_str(
        r##"{"axes": {"value_grid_color": "not-a-color"}}"##,
    );
    assert!(result.is_err());
}

#[test]
fn options_reject_fixed_layout_overrides() {
    for input in [
        r#"{"legend": {"visible": false, "position": "bottom"}}"#,
        r#"{"series_style": {"line_color": "rgb(0, 123, 255)", "line_width": 2.0,
            "tension": 0.3, "point_radius": 3.0, "point_color": "rgb(0, 123, 255)",
            "fill_area": false}}"#,
        r##"{"axes": {"value_grid_color": "#000000", "category_grid_visible": true}}"##,
    ] {
        let err = ChartOptionsConfig::from_json_compat_str(input).expect_err("must reject");
        assert!(matches!(err, ChartError::InvalidData(_)), "{input}");
    }
}
