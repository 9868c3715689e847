use chrono::NaiveTime;

/// Fluent builder for synthetic dbt logs in the `dbt run` shape
///
/// ```
/// use inflight_testing::LogBuilder;
///
/// let log = LogBuilder::new(10)
///     .start(1, "10:03:09", "hyrule.source_quests")
///     .ok(1, "10:03:19", "hyrule.source_quests")
///     .build();
/// assert_eq!(log.lines().count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct LogBuilder {
    total: u32,
    lines: Vec<String>,
}

impl LogBuilder {
    pub fn new(total: u32) -> Self {
        Self {
            total,
            lines: Vec::new(),
        }
    }

    /// Change the `of <total>` denominator for subsequent lines
    pub fn cohort(mut self, total: u32) -> Self {
        self.total = total;
        self
    }

    pub fn start(mut self, index: u32, at: &str, name: &str) -> Self {
        let line = format!(
            "{}  {} of {} START sql table model {}  [RUN]",
            at, index, self.total, name
        );
        self.lines.push(line);
        self
    }

    pub fn ok(mut self, index: u32, at: &str, name: &str) -> Self {
        let line = format!(
            "{}  {} of {} OK created sql table model {}  [SELECT in 1.00s]",
            at, index, self.total, name
        );
        self.lines.push(line);
        self
    }

    pub fn error(mut self, index: u32, at: &str, name: &str) -> Self {
        let line = format!(
            "{}  {} of {} ERROR creating sql table model {}  [ERROR in 1.00s]",
            at, index, self.total, name
        );
        self.lines.push(line);
        self
    }

    pub fn fail_test(mut self, index: u32, at: &str, test: &str) -> Self {
        let line = format!(
            "{}  {} of {} FAIL 1 {}  [FAIL 1 in 0.10s]",
            at, index, self.total, test
        );
        self.lines.push(line);
        self
    }

    /// Append a line verbatim
    pub fn raw(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    pub fn blank(mut self) -> Self {
        self.lines.push(String::new());
        self
    }

    pub fn build(&self) -> String {
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }
}

/// `HH:MM:SS` for the n-th second after 10:00:00, for generated logs
pub fn clock(seconds_after_ten: u32) -> String {
    let base = NaiveTime::from_hms_opt(10, 0, 0).unwrap();
    let t = base + chrono::Duration::seconds(i64::from(seconds_after_ten));
    t.format("%H:%M:%S").to_string()
}
