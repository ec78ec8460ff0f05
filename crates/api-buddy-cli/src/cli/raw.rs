//! Conversion from parsed CLI arguments to the validator's raw record.

use api_buddy_core::{HttpMethod, MethodFlags, OptionValue, RawOptions};

use super::Cli;

impl Cli {
    pub fn method_flags(&self) -> MethodFlags {
        let mut flags = MethodFlags::default();
        flags.set(HttpMethod::Get, self.get);
        flags.set(HttpMethod::Post, self.post);
        flags.set(HttpMethod::Patch, self.patch);
        flags.set(HttpMethod::Put, self.put);
        flags.set(HttpMethod::Delete, self.delete);
        flags
    }

    /// Raw options for validation. `data` (when given) and `verbose` are
    /// passthrough fields, in that order.
    pub fn to_raw_options(&self) -> RawOptions {
        let mut passthrough = Vec::new();
        if let Some(data) = &self.data {
            passthrough.push(("data".to_string(), OptionValue::Str(data.clone())));
        }
        passthrough.push(("verbose".to_string(), OptionValue::Bool(self.verbose)));

        RawOptions {
            endpoint: self.endpoint.clone().unwrap_or_default(),
            params: self.params.clone(),
            methods: self.method_flags(),
            passthrough,
        }
    }
}
