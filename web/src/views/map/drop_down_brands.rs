use leptos::prelude::*;
use thaw::{Combobox, ComboboxOption, Flex, FlexAlign, Label};

/// Brand filter fed by the distinct brands present in the loaded datasets.
/// Free text is allowed; matching stays exact, so an unlisted brand simply
/// matches nothing.
#[component]
pub fn DropDownBrands(
    brand: RwSignal<Option<String>>,
    brands: Signal<Vec<String>>,
) -> impl IntoView {
    view! {
        <Flex vertical=true align=FlexAlign::Start>
            <Label>"Brand"</Label>
            <Combobox selected_options=brand placeholder="Any brand">
                {move || brands.get().into_iter().map(|brand_name| {
                    view! {
                        <ComboboxOption value=brand_name.clone() text=brand_name />
                    }
                }).collect_view()}
            </Combobox>
        </Flex>
    }
}
