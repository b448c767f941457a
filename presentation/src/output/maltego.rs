//! Maltego transform response formatter

use osrf_domain::Entity;

/// Default weight Maltego gives to returned entities
const WEIGHT: u32 = 100;

/// Formats entities as a Maltego transform response message
pub struct MaltegoFormatter;

impl MaltegoFormatter {
    /// Format the complete response message
    pub fn format(entities: &[Entity]) -> String {
        let mut output = String::new();

        output.push_str("<MaltegoMessage>\n");
        output.push_str("<MaltegoTransformResponseMessage>\n");
        output.push_str("<Entities>\n");
        for entity in entities {
            output.push_str(&Self::entity(entity));
        }
        output.push_str("</Entities>\n");
        output.push_str("<UIMessages>\n</UIMessages>\n");
        output.push_str("</MaltegoTransformResponseMessage>\n");
        output.push_str("</MaltegoMessage>\n");

        output
    }

    fn entity(entity: &Entity) -> String {
        let mut output = format!("<Entity Type=\"{}\">\n", escape(&entity.kind));
        output.push_str(&format!("<Value>{}</Value>\n", escape(&entity.value)));
        output.push_str(&format!("<Weight>{}</Weight>\n", WEIGHT));

        if !entity.attributes.is_empty() {
            output.push_str("<AdditionalFields>\n");
            for attribute in &entity.attributes {
                let name = escape(&attribute.kind);
                output.push_str(&format!(
                    "<Field Name=\"{name}\" DisplayName=\"{name}\">{}</Field>\n",
                    escape(&attribute.value)
                ));
            }
            output.push_str("</AdditionalFields>\n");
        }

        output.push_str("</Entity>\n");
        output
    }
}

/// Escape text for XML content and attribute values
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}
