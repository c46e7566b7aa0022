use time::OffsetDateTime;
use time::macros::format_description;

use crate::Language;

/// Renders a server timestamp the way each locale writes dates.
pub fn format_timestamp(ts: OffsetDateTime, lang: Language) -> String {
    let rendered = match lang {
        Language::Uz => ts.format(format_description!(
            "[day].[month].[year] [hour]:[minute]"
        )),
        Language::Ru => ts.format(format_description!(
            "[day].[month].[year], [hour]:[minute]"
        )),
    };
    // Only fails for descriptions that need components the value lacks.
    rendered.unwrap_or_else(|_| ts.to_string())
}
