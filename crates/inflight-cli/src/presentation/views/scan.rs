use std::fmt;

use crate::presentation::view_models::{CreateView, ScanViewModel, ViewMode};

impl CreateView for ScanViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(ScanView { data: self, mode })
    }
}

struct ScanView<'a> {
    data: &'a ScanViewModel,
    mode: ViewMode,
}

impl<'a> ScanView<'a> {
    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for task in &self.data.open_tasks {
            writeln!(f, "{}", task.task_name)?;
        }
        Ok(())
    }

    fn render_compact(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for task in &self.data.open_tasks {
            writeln!(
                f,
                "{}  #{}  {}",
                task.start_time, task.task_index, task.task_name
            )?;
        }
        Ok(())
    }

    fn render_standard(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.open_tasks.is_empty() {
            return Ok(());
        }

        writeln!(f, "{:>4}  {:<8}  NAME", "#", "STARTED")?;
        for task in &self.data.open_tasks {
            writeln!(
                f,
                "{:>4}  {:<8}  {}",
                task.task_index,
                task.start_time.to_string(),
                task.task_name
            )?;
        }
        Ok(())
    }

    fn render_verbose(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if !self.data.open_tasks.is_empty() {
            writeln!(
                f,
                "{:>4}  {:>4}  {:<8}  {:<12}  NAME",
                "#", "OF", "STARTED", "KIND"
            )?;
            for task in &self.data.open_tasks {
                writeln!(
                    f,
                    "{:>4}  {:>4}  {:<8}  {:<12}  {}",
                    task.task_index,
                    task.total_tasks,
                    task.start_time.to_string(),
                    task.kind.as_deref().unwrap_or("-"),
                    task.task_name
                )?;
            }
            writeln!(f)?;
        }

        let s = &self.data.summary;
        writeln!(f, "Source:    {}", self.data.source)?;
        writeln!(f, "Lines:     {}", s.lines)?;
        writeln!(
            f,
            "Events:    {} ({} started, {} finished)",
            s.events, s.starts, s.terminals
        )?;
        writeln!(
            f,
            "Outcomes:  ok {}, error {}, fail {}, pass {}, warn {}, skip {}",
            s.ok, s.error, s.fail, s.pass, s.warn, s.skip
        )?;
        writeln!(f, "Orphans:   {}", s.orphans)?;
        if let (Some(first), Some(last)) = (s.first_timestamp, s.last_timestamp) {
            writeln!(f, "Window:    {} - {}", first, last)?;
        }
        let cohorts: Vec<String> = s.cohorts.iter().map(|t| format!("of {}", t)).collect();
        writeln!(f, "Cohorts:   {}", cohorts.join(", "))?;
        writeln!(f, "Join key:  {}", s.join_key)?;
        Ok(())
    }
}

impl<'a> fmt::Display for ScanView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => self.render_minimal(f),
            ViewMode::Compact => self.render_compact(f),
            ViewMode::Standard => self.render_standard(f),
            ViewMode::Verbose => self.render_verbose(f),
        }
    }
}
