//! Regression test parameters and operations

use pixlabel_core::{FPix, LabelPix};

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Compare results and fail on mismatch (default)
    #[default]
    Compare,
    /// Display mode - report mismatches without failing
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// This structure tracks the state of a regression test, including
/// the test name, current index, mode, and success status.
pub struct RegParams {
    /// Name of the test (e.g., "conncomp")
    pub test_name: String,
    /// Current test index (incremented before each test)
    index: usize,
    /// Test mode (compare or display)
    pub mode: RegTestMode,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// The mode is taken from the `REGTEST_MODE` environment variable.
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current test index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    fn record_failure(&mut self, msg: String) {
        eprintln!("{}", msg);
        self.failures.push(msg);
        if !self.display() {
            self.success = false;
        }
    }

    /// Compare two floating-point values
    ///
    /// # Arguments
    ///
    /// * `expected` - Expected value
    /// * `actual` - Actual computed value
    /// * `delta` - Maximum allowed difference
    ///
    /// # Returns
    ///
    /// `true` if values match within delta, `false` otherwise.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            self.record_failure(msg);
            false
        } else {
            true
        }
    }

    /// Compare two images for exact pixel equality
    pub fn compare_fpix(&mut self, fpix1: &FPix, fpix2: &FPix) -> bool {
        self.index += 1;

        if fpix1.dimensions() != fpix2.dimensions() {
            let msg = format!(
                "Failure in {}_reg: fpix comparison for index {} - dimension mismatch",
                self.test_name, self.index
            );
            self.record_failure(msg);
            return false;
        }

        // Bitwise so that NaN pixels compare equal to themselves
        let mismatch = fpix1
            .data()
            .iter()
            .zip(fpix2.data())
            .position(|(a, b)| a.to_bits() != b.to_bits());

        if let Some(i) = mismatch {
            let width = fpix1.width() as usize;
            let msg = format!(
                "Failure in {}_reg: fpix comparison for index {} - pixel mismatch at ({}, {})",
                self.test_name,
                self.index,
                i % width,
                i / width
            );
            self.record_failure(msg);
            return false;
        }

        true
    }

    /// Compare two label grids for exact equality
    pub fn compare_labels(&mut self, labels1: &LabelPix, labels2: &LabelPix) -> bool {
        self.index += 1;

        if labels1.dimensions() != labels2.dimensions() {
            let msg = format!(
                "Failure in {}_reg: label comparison for index {} - dimension mismatch",
                self.test_name, self.index
            );
            self.record_failure(msg);
            return false;
        }

        let mismatch = labels1
            .data()
            .iter()
            .zip(labels2.data())
            .position(|(a, b)| a != b);

        if let Some(i) = mismatch {
            let width = labels1.width() as usize;
            let msg = format!(
                "Failure in {}_reg: label comparison for index {} - label mismatch at ({}, {})",
                self.test_name,
                self.index,
                i % width,
                i / width
            );
            self.record_failure(msg);
            return false;
        }

        true
    }

    /// Record a boolean check
    ///
    /// Shorthand for `compare_values(1.0, if ok { 1.0 } else { 0.0 }, 0.0)`.
    pub fn check(&mut self, ok: bool) -> bool {
        self.compare_values(1.0, if ok { 1.0 } else { 0.0 }, 0.0)
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all tests passed (or the test ran in display mode).
    pub fn cleanup(self) -> bool {
        if self.failures.is_empty() {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all tests have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}
