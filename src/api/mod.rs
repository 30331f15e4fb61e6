mod builder;
mod chart_config;
mod json_contract;
mod mount;
mod options_config;
mod validation;

pub use builder::{ChartConfigBuilder, RenderReport};
pub use chart_config::{
    AxisOptions, AxisTitleOptions, ChartConfig, ChartData, ChartKind, ChartOptions, DatasetConfig,
    Fill, FontOptions, GridOptions, LegendOptions, LegendPosition, PluginOptions, ScaleOptions,
    TitleOptions,
};
pub use json_contract::{
    CHART_CONFIG_JSON_SCHEMA_V1, CHART_OPTIONS_JSON_SCHEMA_V1, ChartConfigJsonContractV1,
    ChartOptionsJsonContractV1,
};
pub use mount::{ChartMount, MountState};
pub use options_config::{
    AxisBehavior, ChartOptionsConfig, ChartTextConfig, DEFAULT_CATEGORY_AXIS_TITLE,
    DEFAULT_CHART_TITLE, DEFAULT_GRADIENT_EXTENT_PX, DEFAULT_VALUE_AXIS_TITLE,
    FillGradientBehavior, SeriesStyle,
};
