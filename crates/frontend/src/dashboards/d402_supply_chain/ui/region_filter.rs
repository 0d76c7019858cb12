use contracts::enums::Region;
use leptos::prelude::*;
use std::collections::HashSet;
use thaw::*;

/// Codes of every region, the initial selection
pub fn all_region_codes() -> HashSet<String> {
    Region::ALL.iter().map(|r| r.code().to_string()).collect()
}

/// Multi-select of regions; the options are the regions present in the data.
#[component]
pub fn RegionFilter(
    selected: RwSignal<HashSet<String>>,
    #[prop(into)] options: Signal<Vec<Region>>,
) -> impl IntoView {
    view! {
        <div class="region-filter">
            <div class="region-filter__label">"Select Regions"</div>
            <CheckboxGroup value=selected>
                <div class="region-filter__options">
                    {move || options.get().into_iter().map(|region| {
                        let code = region.code().to_string();
                        view! {
                            <Checkbox value=code.clone() label=code />
                        }
                    }).collect_view()}
                </div>
            </CheckboxGroup>
            <div class="region-filter__actions">
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| selected.set(all_region_codes())
                >
                    "All"
                </Button>
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| selected.set(HashSet::new())
                >
                    "None"
                </Button>
            </div>
        </div>
    }
}
