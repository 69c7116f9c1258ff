use formats::{ClusterMethod, ColorField};

/// Dropdown width shared by both selectors, pixels. Two of them side by
/// side span the 750px figure exactly.
pub const SELECT_WIDTH: u32 = 375;

/// DOM id of the district-type selector.
pub const METHOD_SELECT_ID: &str = "district-type";
/// DOM id of the district-info selector.
pub const FIELD_SELECT_ID: &str = "district-info";

/// One labelled dropdown control: value/label option pairs and the value
/// selected on first render.
#[derive(Debug, Clone, PartialEq)]
pub struct Dropdown {
    pub id: &'static str,
    pub title: String,
    pub width: u32,
    pub options: Vec<(String, String)>,
    pub active: String,
}

/// The district-type selector: swaps which collection backs the polygons.
pub fn method_select(active: ClusterMethod) -> Dropdown {
    Dropdown {
        id: METHOD_SELECT_ID,
        title: "District Type".to_string(),
        width: SELECT_WIDTH,
        options: ClusterMethod::ALL
            .iter()
            .map(|m| (m.key().to_string(), m.label().to_string()))
            .collect(),
        active: active.key().to_string(),
    }
}

/// The district-info selector: repoints the property the fill reads.
pub fn field_select(active: ColorField) -> Dropdown {
    Dropdown {
        id: FIELD_SELECT_ID,
        title: "District information".to_string(),
        width: SELECT_WIDTH,
        options: ColorField::ALL
            .iter()
            .map(|f| (f.key().to_string(), f.label().to_string()))
            .collect(),
        active: active.key().to_string(),
    }
}

impl Dropdown {
    /// Renders the control as a labelled `<select>` element.
    pub fn render(&self) -> String {
        let options: String = self
            .options
            .iter()
            .map(|(value, label)| {
                let selected = if *value == self.active { " selected" } else { "" };
                format!(
                    r#"<option value="{value}"{selected}>{label}</option>"#,
                    value = html_escape(value),
                    selected = selected,
                    label = html_escape(label),
                )
            })
            .collect();

        format!(
            r#"<label class="district-map-select" style="width: {width}px"><span>{title}</span><select id="{id}">{options}</select></label>"#,
            width = self.width,
            title = html_escape(&self.title),
            id = self.id,
            options = options,
        )
    }
}

/// Escape HTML special characters.
pub(crate) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
