use contracts::dashboards::d400_overview::{recent_transactions, TransactionStatus};
use contracts::enums::ClosedSet;
use leptos::prelude::*;
use thaw::*;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::ui::{Avatar, Badge};
use crate::shared::icons::icon;
use crate::shared::number_format::format_money;

fn transaction_variant(status: TransactionStatus) -> &'static str {
    match status {
        TransactionStatus::Completed => "success",
        TransactionStatus::Pending => "warning",
        TransactionStatus::Failed => "error",
    }
}

#[component]
pub fn RecentTransactionsWidget() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="widget-card">
            <div class="widget-card__header">
                <div class="widget-card__title-group">
                    {icon("credit-card")}
                    <h3 class="widget-card__title">"Recent Transactions"</h3>
                </div>
                <button class="link-btn" on:click=move |_| ctx.open_page("transaction")>"View All"</button>
            </div>

            <div class="table-wrapper">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell resizable=false min_width=180.0>"User"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=100.0>"Room"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=90.0>"Amount"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=100.0>"Status"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=100.0>"Time"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {recent_transactions()
                            .iter()
                            .map(|tx| view! {
                                <TableRow>
                                    <TableCell>
                                        <div class="table__person">
                                            <Avatar initials=tx.avatar.clone() />
                                            <span>{tx.user.clone()}</span>
                                        </div>
                                    </TableCell>
                                    <TableCell>{tx.room.clone()}</TableCell>
                                    <TableCell>
                                        <span class="table__strong">{format_money(tx.amount)}</span>
                                    </TableCell>
                                    <TableCell>
                                        <Badge variant=transaction_variant(tx.status)>{tx.status.display_name()}</Badge>
                                    </TableCell>
                                    <TableCell>
                                        <span class="table__muted">{tx.time.clone()}</span>
                                    </TableCell>
                                </TableRow>
                            })
                            .collect_view()}
                    </TableBody>
                </Table>
            </div>
        </div>
    }
}
