// Device listing parsers
// One strategy per QueryKind; both are pure text -> ordered identifiers

use crate::domain::{DeviceId, QueryKind};

/// Separator between identifier and description in full listings
const DESCRIPTION_SEPARATOR: &str = " : ";

impl QueryKind {
    /// Parse raw tool output with the grammar belonging to this query
    pub fn parse(self, output: &str) -> Vec<DeviceId> {
        match self {
            QueryKind::ActiveDevices => parse_active_devices(output),
            QueryKind::AllRegisteredDevices => parse_all_devices(output),
        }
    }
}

/// Parse the active-devices listing
///
/// Keeps every line that is non-empty and has no whitespace anywhere; resource
/// detail lines are indented and summary lines contain spaces, so both drop out.
pub fn parse_active_devices(output: &str) -> Vec<DeviceId> {
    split_lines(output)
        .filter(|line| !line.trim().is_empty())
        .filter(|line| !line.chars().any(char::is_whitespace))
        .map(DeviceId::from)
        .collect()
}

/// Parse the all-registered-devices listing
///
/// Lines look like `<identifier> : <description>`, with exactly one space on each
/// side of the colon. The identifier is the text before the first separator with
/// trailing whitespace removed. Lines without a separator, or with nothing before
/// it, contribute nothing.
pub fn parse_all_devices(output: &str) -> Vec<DeviceId> {
    split_lines(output)
        .filter_map(|line| {
            let (identifier, _description) = line.split_once(DESCRIPTION_SEPARATOR)?;
            let identifier = identifier.trim_end();
            (!identifier.is_empty()).then(|| DeviceId::from(identifier))
        })
        .collect()
}

/// Split on `\r\n`, `\n` or bare `\r`
///
/// A `\r\n` pair yields an extra empty line; neither grammar accepts empty lines.
fn split_lines(output: &str) -> impl Iterator<Item = &str> {
    output.split(['\r', '\n'])
}
