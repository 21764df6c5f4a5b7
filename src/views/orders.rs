//! Orders Views
//!
//! Parent layout with the list and details views rendered in its outlet.

use leptos::*;
use leptos_router::{use_params_map, Outlet, A};

use crate::models::order::find_order;
use crate::models::{demo_orders, Order, OrderStatus};
use crate::router::AppRouter;

#[component]
pub fn OrdersView() -> impl IntoView {
    view! {
        <div class="space-y-6">
            <h1 class="text-3xl font-bold">"Orders"</h1>
            <Outlet />
        </div>
    }
}

#[component]
pub fn OrdersList() -> impl IntoView {
    view! {
        <table class="w-full text-left">
            <thead class="text-sm text-gray-500">
                <tr>
                    <th class="py-2">"Order"</th>
                    <th>"Customer"</th>
                    <th>"Placed"</th>
                    <th>"Total"</th>
                    <th>"Status"</th>
                </tr>
            </thead>
            <tbody>
                {demo_orders().into_iter().map(|o| view! { <OrderRow order=o /> }).collect_view()}
            </tbody>
        </table>
    }
}

#[component]
fn OrderRow(order: Order) -> impl IntoView {
    let router = expect_context::<AppRouter>();
    let href = router.href("Order Details", &[("id", order.id.as_str())]);
    let label = order_label(&order);

    view! {
        <tr class="border-t border-primary-100">
            <td class="py-2">
                <A href=href class="text-primary-400 hover:underline">
                    {label}
                </A>
            </td>
            <td>{order.customer.clone()}</td>
            <td>{order.placed_display()}</td>
            <td>{order.total_display()}</td>
            <td><StatusBadge status=order.status /></td>
        </tr>
    }
}

#[component]
fn StatusBadge(status: OrderStatus) -> impl IntoView {
    view! {
        <span class=format!("px-2 py-1 rounded text-xs text-white {}", status.badge_class())>
            {status.label()}
        </span>
    }
}

/// Link text for an order
fn order_label(order: &Order) -> String {
    format!("#{}", order.id)
}

#[component]
pub fn OrderDetails() -> impl IntoView {
    let router = expect_context::<AppRouter>();
    let back = router.href("Manage Orders", &[]);
    let params = use_params_map();
    let order = move || params.with(|p| p.get("id").and_then(|id| find_order(id)));

    view! {
        <div class="space-y-4">
            <A href=back class="text-sm text-primary-400">"← All orders"</A>
            {move || match order() {
                Some(order) => view! {
                    <div class="bg-primary-100 dark:bg-cardBackgroundDark rounded-xl p-6 space-y-2">
                        <h2 class="text-2xl font-bold">{format!("Order {}", order_label(&order))}</h2>
                        <div>{order.customer.clone()}</div>
                        <div class="text-gray-500">{format!("Placed {}", order.placed_display())}</div>
                        <div class="text-xl">{order.total_display()}</div>
                        <StatusBadge status=order.status />
                    </div>
                }
                .into_view(),
                None => view! {
                    <p class="text-gray-400">"That order could not be found."</p>
                }
                .into_view(),
            }}
        </div>
    }
}
