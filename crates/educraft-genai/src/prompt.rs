//! Prompt text and response schema sent to the provider.

use std::sync::LazyLock;

use serde_json::{json, Value};

use educraft_core::{GeneratedContent, SchoolConfig};

/// System instruction attached to every request.
pub const SYSTEM_INSTRUCTION: &str =
    "You are a professional web copywriter for educational institutions.";

static RESPONSE_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    let triple = |fields: [&str; 3]| {
        let properties: serde_json::Map<String, Value> = fields
            .iter()
            .map(|f| (f.to_string(), json!({ "type": "STRING" })))
            .collect();
        json!({
            "type": "OBJECT",
            "properties": properties,
            "required": fields,
        })
    };

    json!({
        "type": "OBJECT",
        "properties": {
            "heroHeadline": {
                "type": "STRING",
                "description": "A catchy, inspiring headline for the homepage hero section."
            },
            "heroSubheadline": {
                "type": "STRING",
                "description": "A supporting sentence for the hero section."
            },
            "missionStatement": {
                "type": "STRING",
                "description": "A concise mission statement (1-2 sentences)."
            },
            "aboutText": {
                "type": "STRING",
                "description": "A paragraph describing the school's history and values (approx 80 words)."
            },
            "principalMessage": {
                "type": "STRING",
                "description": "A welcoming message from the school head (approx 100 words)."
            },
            "principalName": {
                "type": "STRING",
                "description": "A fictional name for the principal or dean."
            },
            "academicHighlights": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "List of 4 key academic or extracurricular strengths (e.g., 'STEM Excellence')."
            },
            "events": {
                "type": "ARRAY",
                "items": triple(["title", "date", "description"]),
                "description": "3 upcoming fictional events relevant to the school type."
            },
            "faculty": {
                "type": "ARRAY",
                "items": triple(["name", "role", "bio"]),
                "description": "3 featured faculty members with brief bios."
            },
            "testimonials": {
                "type": "ARRAY",
                "items": triple(["name", "role", "quote"]),
                "description": "6 testimonials from students, parents, or alumni praising the school."
            },
            "footerText": {
                "type": "STRING",
                "description": "A short closing footer sentence."
            }
        },
        "required": GeneratedContent::REQUIRED_FIELDS,
    })
});

/// The structured-output schema, in the provider's OpenAPI subset.
pub fn response_schema() -> &'static Value {
    &RESPONSE_SCHEMA
}

/// Build the user prompt for a configuration.
pub fn build_prompt(config: &SchoolConfig) -> String {
    let school_type = config.school_type.label();
    format!(
        "Create website content for a school with the following details:\n\
         Name: {}\n\
         Type: {}\n\
         Motto: {}\n\
         Location: {}\n\
         \n\
         The tone should be professional, welcoming, and appropriate for a {}.\n\
         Be creative but realistic.",
        config.name, school_type, config.motto, config.location, school_type
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use educraft_core::{BrandColor, SchoolType};

    fn config() -> SchoolConfig {
        SchoolConfig {
            name: "Lakeside Online".to_string(),
            school_type: SchoolType::Online,
            motto: "Learn Anywhere".to_string(),
            location: "Portland, OR".to_string(),
            primary_color: BrandColor::primary(),
            secondary_color: BrandColor::secondary(),
        }
    }

    #[test]
    fn prompt_embeds_textual_fields() {
        let prompt = build_prompt(&config());

        assert!(prompt.contains("Name: Lakeside Online"));
        assert!(prompt.contains("Type: Online Learning"));
        assert!(prompt.contains("Motto: Learn Anywhere"));
        assert!(prompt.contains("Location: Portland, OR"));
        assert!(prompt.contains("appropriate for a Online Learning."));
        assert!(!prompt.contains("#1e40af"));
    }

    #[test]
    fn schema_requires_every_content_field() {
        let schema = response_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();

        assert_eq!(required, GeneratedContent::REQUIRED_FIELDS);

        let properties = schema["properties"].as_object().unwrap();
        for field in GeneratedContent::REQUIRED_FIELDS {
            assert!(properties.contains_key(field), "missing property {field}");
        }
    }

    #[test]
    fn schema_carries_quantity_hints() {
        let schema = response_schema();

        assert!(schema["properties"]["academicHighlights"]["description"]
            .as_str()
            .unwrap()
            .starts_with("List of 4"));
        assert!(schema["properties"]["testimonials"]["description"]
            .as_str()
            .unwrap()
            .starts_with("6 "));
        assert_eq!(
            schema["properties"]["faculty"]["items"]["required"],
            json!(["name", "role", "bio"])
        );
        assert!(schema["properties"]["events"].get("maxItems").is_none());
    }
}
