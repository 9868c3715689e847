use crate::presentation::view_models::{CommandResultViewModel, ExampleViewModel};

pub fn present_example(text: &str) -> CommandResultViewModel<ExampleViewModel> {
    CommandResultViewModel::new(ExampleViewModel {
        text: text.to_string(),
    })
}
