//! Dashboard page: root module wiring the Yew `Component` implementation with
//! submodules for state, update logic, view rendering and DOM helpers.
//!
//! Responsibilities
//! - Own every piece of page state (field registry, analytics session,
//!   cached results) and hand read-only views of it to the child components.
//! - Delegate to `update::update` and `view::view`.
//! - On first render, start the credential check chain.

use yew::prelude::*;

mod helpers;
mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::DashboardComponent;

impl Component for DashboardComponent {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        DashboardComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            ctx.link().send_message(Msg::CheckCredentials);
        }
    }
}
