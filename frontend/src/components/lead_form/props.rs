//! Defines the properties for the `LeadFormComponent`.

use common::form::policy::FailurePolicy;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct LeadFormProps {
    /// What a failed submission shows. Fixed for the component's lifetime.
    #[prop_or_default]
    pub policy: FailurePolicy,

    /// Value of the hidden `sourcePage` input. Left empty, the server records `homepage`.
    #[prop_or_default]
    pub source_page: AttrValue,

    /// Emitted once the success panel is shown.
    #[prop_or_default]
    pub on_success: Callback<()>,
}
