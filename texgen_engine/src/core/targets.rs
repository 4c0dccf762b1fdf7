use crate::tracing_targets;

tracing_targets! {
    NOISE = "noise",
    GRADIENT = "gradient",
    RENDER = "render",
    GENERATOR = "generator",
}
