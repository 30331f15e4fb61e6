mod support;

use matrix_trend_chart::ChartError;
use matrix_trend_chart::api::{ChartMount, ChartOptionsConfig, MountState};
use matrix_trend_chart::core::{ChartPayload, Viewport};
use matrix_trend_chart::render::{NullRenderer, SurfaceHandle, SurfaceRegistry, SurfaceResolver};

use support::{page_surfaces, with_error_counter};

fn payload() -> ChartPayload {
    ChartPayload::new([0, 1, 2, 3], "Matrix Trend", [10.0, 12.5, 9.0, 15.0])
}

#[test]
fn load_renders_exactly_once() {
    let mut mount = ChartMount::new(
        page_surfaces(),
        NullRenderer::default(),
        ChartOptionsConfig::new(),
    )
    .expect("mount");
    assert_eq!(mount.state(), MountState::Pending);

    let report = mount.on_load(Some(&payload())).expect("first load");
    assert_eq!(report.point_count, 4);
    assert_eq!(mount.state(), MountState::Rendered);

    let second = mount.on_load(Some(&payload()));
    assert!(matches!(second, Err(ChartError::AlreadyMounted)));
    assert_eq!(mount.renderer().render_calls, 1);
}

#[test]
fn missing_payload_aborts_mount_and_later_loads_are_refused() {
    let mut mount = ChartMount::new(
        page_surfaces(),
        NullRenderer::default(),
        ChartOptionsConfig::new(),
    )
    .expect("mount");

    let (result, errors) = with_error_counter(|| mount.on_load(None));
    assert!(matches!(result, Err(ChartError::MissingPayload)));
    assert_eq!(errors, 1);
    assert_eq!(mount.state(), MountState::Aborted);

    let retry = mount.on_load(Some(&payload()));
    assert!(matches!(retry, Err(ChartError::AlreadyMounted)));
    assert_eq!(mount.into_renderer().render_calls, 0);
}

#[test]
fn unresolvable_surface_fails_fast_without_render() {
    let mut mount = ChartMount::new(
        SurfaceRegistry::new(),
        NullRenderer::default(),
        ChartOptionsConfig::new(),
    )
    .expect("mount");

    let (result, errors) = with_error_counter(|| mount.on_load(Some(&payload())));
    match result {
        Err(ChartError::SurfaceUnavailable { element_id }) => {
            assert_eq!(element_id, "myBarChart");
        }
        other => panic!("unexpected result: {other:?}"),
    }
    assert_eq!(errors, 1);
    assert_eq!(mount.renderer().render_calls, 0);
}

#[test]
fn misaligned_payload_is_rejected_before_surface_lookup() {
    let mut mount = ChartMount::new(
        SurfaceRegistry::new(),
        NullRenderer::default(),
        ChartOptionsConfig::new(),
    )
    .expect("mount");
    let misaligned = ChartPayload::new(["a", "b", "c"], "s", [1.0]);

    let (result, errors) = with_error_counter(|| mount.on_load(Some(&misaligned)));
    assert!(matches!(
        result,
        Err(ChartError::RejectedPayload {
            labels: 3,
            values: 1
        })
    ));
    assert_eq!(errors, 1);
    assert_eq!(mount.state(), MountState::Aborted);
    assert_eq!(mount.renderer().render_calls, 0);
}

#[test]
fn registry_resolves_registered_viewport() {
    let surfaces = SurfaceRegistry::new()
        .with_surface("trend-canvas", Viewport::new(640, 320))
        .expect("registry");

    let handle = surfaces.resolve("trend-canvas").expect("registered surface");
    assert_eq!(handle.element_id(), "trend-canvas");
    assert_eq!(handle.viewport(), Viewport::new(640, 320));
    assert!(surfaces.resolve("myBarChart").is_none());
}

#[test]
fn closure_resolver_receives_configured_element_id() {
    let resolver = |element_id: &str| {
        (element_id == "trend-canvas")
            .then(|| SurfaceHandle::new(element_id, Viewport::new(300, 150)).ok())
            .flatten()
    };
    let options = ChartOptionsConfig::new().with_element_id("trend-canvas");
    let mut mount =
        ChartMount::new(resolver, NullRenderer::default(), options).expect("mount");
    assert_eq!(mount.builder().options().element_id, "trend-canvas");

    let report = mount.on_load(Some(&payload())).expect("load");
    assert_eq!(report.element_id, "trend-canvas");
    assert_eq!(
        mount.renderer().last_element_id.as_deref(),
        Some("trend-canvas")
    );
}

#[test]
fn invalid_options_fail_mount_construction() {
    let options = ChartOptionsConfig::new().with_title("");
    let result = ChartMount::new(page_surfaces(), NullRenderer::default(), options);
    assert!(matches!(result, Err(ChartError::InvalidData(_))));
}
