use std::fmt;

use crate::presentation::view_models::{CreateView, ExampleViewModel, ViewMode};

impl CreateView for ExampleViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(ExampleView { data: self })
    }
}

struct ExampleView<'a> {
    data: &'a ExampleViewModel,
}

impl<'a> fmt::Display for ExampleView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.data.text)
    }
}
