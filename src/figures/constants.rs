//! Axis descriptions and output names shared by the figure builders

/// Occupation probability axis
pub const P_AXIS: &str = "p";

/// Flow probability axis
pub const P_FLOW_AXIS: &str = "P_flow";

/// Mean size of the largest cluster
pub const S_MAX_AXIS: &str = "<s_max>";

/// Cluster size axis of the distribution figures
pub const S_AXIS: &str = "s";

/// File stem of the flow probability figure
pub const FLOW_FIGURE_STEM: &str = "flow_probability";

/// File stem of the largest cluster figure
pub const MAX_CLUSTER_FIGURE_STEM: &str = "max_cluster_size";
