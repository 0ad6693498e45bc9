use crate::error::{AppError, AppResult};
use handlebars::Handlebars;
use serde::Serialize;

const PARTIALS: [(&str, &str); 2] = [
    ("layout_header", include_str!("../templates/layout_header.hbs")),
    ("layout_footer", include_str!("../templates/layout_footer.hbs")),
];

const PAGES: [(&str, &str); 5] = [
    ("index", include_str!("../templates/index.hbs")),
    ("success", include_str!("../templates/success.hbs")),
    ("results", include_str!("../templates/results.hbs")),
    ("dashboard", include_str!("../templates/dashboard.hbs")),
    (
        "province_dashboard",
        include_str!("../templates/province_dashboard.hbs"),
    ),
];

/// Page templates compiled into the binary
pub struct Templates {
    registry: Handlebars<'static>,
}

impl Templates {
    pub fn new() -> AppResult<Self> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(false);

        for (name, source) in PARTIALS {
            registry
                .register_partial(name, source)
                .map_err(|e| AppError::Internal(format!("Failed to register partial {name}: {e}")))?;
        }
        for (name, source) in PAGES {
            registry
                .register_template_string(name, source)
                .map_err(|e| AppError::Internal(format!("Failed to register template {name}: {e}")))?;
        }

        Ok(Self { registry })
    }

    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> AppResult<String> {
        Ok(self.registry.render(name, data)?)
    }
}

/// Serializes a value for embedding inside a `<script>` element
pub fn script_json<T: Serialize>(value: &T) -> AppResult<String> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_all_templates_register() {
        let templates = Templates::new().unwrap();
        for (name, _) in PAGES {
            assert!(templates.registry.has_template(name), "missing {name}");
        }
    }

    #[test]
    fn test_script_json_cannot_close_the_tag() {
        let encoded = script_json(&json!({"name": "</script><script>alert(1)"})).unwrap();
        assert!(!encoded.contains("</"));
        let decoded: serde_json::Value = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded["name"], "</script><script>alert(1)");
    }

    #[test]
    fn test_success_page_renders_notice_escaped() {
        let templates = Templates::new().unwrap();
        let html = templates
            .render(
                "success",
                &json!({
                    "message": "Assessment submitted successfully!",
                    "notice": "<b>hi</b>",
                    "level": "success",
                }),
            )
            .unwrap();

        assert!(html.contains("Assessment submitted successfully!"));
        assert!(html.contains("&lt;b&gt;hi&lt;/b&gt;"));
        assert!(html.contains("notice-success"));
    }
}
