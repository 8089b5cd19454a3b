//! HTML markup for a rendered widget.
//!
//! Matches the markup hosts already style: a `<select>` for single select,
//! and `<ul>` lists of labelled inputs for radio and checkbox groups.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::render::{Widget, WidgetOption};
use crate::types::Variant;

/// Render `widget` as an HTML fragment. Attribute values and labels are escaped.
pub fn render_html(widget: &Widget) -> String {
    let mut html = String::new();
    match widget.variant {
        Variant::SingleSelect => {
            html.push_str(&format!(
                r#"<select id="{}" class="{}" name="{}">"#,
                encode_double_quoted_attribute(&widget.field_id),
                encode_double_quoted_attribute(&widget.class),
                encode_double_quoted_attribute(&widget.input_name),
            ));
            for option in &widget.options {
                let selected = if option.selected {
                    r#" selected="selected""#
                } else {
                    ""
                };
                html.push_str(&format!(
                    r#"<option{} value="{}">{}</option>"#,
                    selected,
                    encode_double_quoted_attribute(&option.id),
                    encode_text(&option.label),
                ));
            }
            html.push_str("</select>");
        }
        Variant::RadioGroup => {
            html.push_str(r#"<ul class="radio_list radio horizontal">"#);
            for option in &widget.options {
                push_choice(&mut html, "radio", widget, option);
            }
            html.push_str("</ul>");
        }
        Variant::CheckboxGroup => {
            html.push_str(r#"<ul class="checkbox_list checkbox">"#);
            for option in &widget.options {
                push_choice(&mut html, "checkbox", widget, option);
            }
            html.push_str("</ul>");
        }
    }
    html
}

fn push_choice(html: &mut String, input_type: &str, widget: &Widget, option: &WidgetOption) {
    let checked = if option.selected {
        r#" checked="checked""#
    } else {
        ""
    };
    html.push_str(&format!(
        r#"<li><input type="{}"{} class="{}" name="{}" value="{}"><label>{}</label></li>"#,
        input_type,
        checked,
        encode_double_quoted_attribute(&widget.class),
        encode_double_quoted_attribute(&widget.input_name),
        encode_double_quoted_attribute(&option.id),
        encode_text(&option.label),
    ));
}
