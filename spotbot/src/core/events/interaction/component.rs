use crate::{
    active::pagination::PageAction,
    core::{events::EventKind, Context},
    util::interaction::InteractionComponent,
};

/// Presses on pagination buttons are picked up by the owning session
/// through standby so only logging remains to be done here.
pub fn handle_component(ctx: &Context, component: InteractionComponent) {
    let name = component.data.custom_id.as_str();
    EventKind::Component.log(ctx, &component, name);

    if PageAction::from_custom_id(name).is_none() {
        error!(name, ?component, "Unknown message component");
    }
}
