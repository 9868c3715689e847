use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ExampleViewModel {
    pub text: String,
}
