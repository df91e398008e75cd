use rexpr_parse::ParseForm;

/// Settings for [`Expression::parse_with`](crate::Expression::parse_with).
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct ParseOptions {
    pub form: ParseForm,
    /// Re-render a successful parse and fail if it differs from the input.
    /// On by default in debug builds.
    pub verify_round_trip: bool,
}

impl ParseOptions {
    #[must_use]
    pub fn with_form(mut self, form: ParseForm) -> Self {
        self.form = form;
        self
    }

    #[must_use]
    pub fn with_verify_round_trip(mut self, verify: bool) -> Self {
        self.verify_round_trip = verify;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            form: ParseForm::default(),
            verify_round_trip: cfg!(debug_assertions),
        }
    }
}
