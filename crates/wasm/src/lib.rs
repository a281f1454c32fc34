use js_sys::Array;
use listmark_core::{CustomListStyles, ListType};
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::*;

// ============================================================================
// Helpers
// ============================================================================

fn nullable(value: Option<&str>) -> JsValue {
    value.map(JsValue::from_str).unwrap_or(JsValue::NULL)
}

/// Type attributes are single characters; anything longer never matches.
fn single_char(input: &str) -> Option<char> {
    let mut chars = input.chars();
    let ch = chars.next()?;
    chars.next().is_none().then_some(ch)
}

// ============================================================================
// Lookup API
// ============================================================================

/// Returns `"numbered"`, `"bulleted"`, or `null` for a list style type.
#[wasm_bindgen(js_name = getListTypeFromListStyleType)]
pub fn get_list_type_from_list_style_type(style_type: &str) -> JsValue {
    nullable(listmark_core::get_list_type_from_list_style_type(style_type).map(ListType::as_str))
}

/// Returns the legacy `type` attribute (`"1"`, `"i"`, `"I"`, `"a"`, `"A"`) or `null`.
#[wasm_bindgen(js_name = getTypeAttributeFromListStyleType)]
pub fn get_type_attribute_from_list_style_type(style_type: &str) -> JsValue {
    listmark_core::get_type_attribute_from_list_style_type(style_type)
        .map_or(JsValue::NULL, |ch| JsValue::from(ch.to_string()))
}

/// Returns the canonical list style type for a legacy `type` attribute, or `null`.
#[wasm_bindgen(js_name = getListStyleTypeFromTypeAttribute)]
pub fn get_list_style_type_from_type_attribute(type_attribute: &str) -> JsValue {
    nullable(
        single_char(type_attribute)
            .and_then(listmark_core::get_list_style_type_from_type_attribute),
    )
}

/// Collapses `-alpha` aliases to their `-latin` form; other input is returned unchanged.
#[wasm_bindgen(js_name = normalizeListStyle)]
pub fn normalize_list_style(style_type: &str) -> String {
    listmark_core::normalize_list_style(style_type).to_string()
}

/// Returns built-in style types followed by custom bulleted and numbered ones.
#[wasm_bindgen(js_name = getAllSupportedStyleTypes)]
pub fn get_all_supported_style_types() -> Array {
    listmark_core::get_all_supported_style_types()
        .into_iter()
        .map(JsValue::from)
        .collect()
}

// ============================================================================
// Registry API
// ============================================================================

/// Registers custom list styles.
///
/// Each kind present in the argument replaces that kind's custom styles;
/// omitted kinds are kept. `null` or `undefined` does nothing.
///
/// # Example (JavaScript)
///
/// ```javascript
/// import { registerCustomListStyles, getListTypeFromListStyleType } from './listmark_wasm';
///
/// registerCustomListStyles({
///   bulleted: [
///     { label: 'Check list style', tooltip: 'Check', type: 'check', icon: '<svg>...</svg>' }
///   ]
/// });
///
/// getListTypeFromListStyleType('check'); // "bulleted"
/// ```
#[wasm_bindgen(js_name = registerCustomListStyles)]
pub fn register_custom_list_styles(custom_styles: JsValue) -> Result<(), JsError> {
    if custom_styles.is_undefined() || custom_styles.is_null() {
        return Ok(());
    }

    let styles: CustomListStyles = serde_wasm_bindgen::from_value(custom_styles)
        .map_err(|e| JsError::new(&format!("Invalid custom list styles: {}", e)))?;
    listmark_core::register_custom_list_styles(styles);
    Ok(())
}

/// Returns the custom style definitions registered for `"bulleted"` or `"numbered"`.
#[wasm_bindgen(js_name = getCustomListStyles)]
pub fn get_custom_list_styles(list_type: &str) -> Result<JsValue, JsError> {
    let list_type: ListType = list_type
        .parse()
        .map_err(|e: listmark_core::UnknownListType| JsError::new(&e.to_string()))?;
    let definitions = listmark_core::global_registry().custom_definitions(list_type);

    serde_wasm_bindgen::to_value(&definitions)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}
