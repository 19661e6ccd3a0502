use taskboard_core::TaskRegistry;

#[derive(Clone)]
pub struct ApiState {
    pub registry: TaskRegistry,
}
