use gloo_console::error;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

mod api;
mod chart;
mod model;
mod state;
mod summary;

use chart::PieChart;
use model::{Category, DebtDraft, Expense, ExpenseDraft};
use state::{BudgetAction, BudgetState};

async fn refresh_expenses(budget: &UseReducerHandle<BudgetState>) {
    match api::fetch_expenses().await {
        Ok(expenses) => budget.dispatch(BudgetAction::ExpensesFetched(expenses)),
        Err(err) => error!(format!("failed to fetch expenses: {}", err)),
    }
}

async fn refresh_debts(budget: &UseReducerHandle<BudgetState>) {
    match api::fetch_debts().await {
        Ok(debts) => budget.dispatch(BudgetAction::DebtsFetched(debts)),
        Err(err) => error!(format!("failed to fetch debts: {}", err)),
    }
}

fn format_amount(amount: f64) -> String {
    format!("${:.2}", amount)
}

#[function_component(App)]
fn app() -> Html {
    let budget = use_reducer(BudgetState::default);

    {
        let budget = budget.clone();
        use_effect_with_deps(
            move |_| {
                // one fetch per collection on first render; a failure logs
                // and leaves that list empty
                let expenses_budget = budget.clone();
                spawn_local(async move { refresh_expenses(&expenses_budget).await });
                spawn_local(async move { refresh_debts(&budget).await });
                || ()
            },
            (),
        );
    }

    let on_edit_expense_draft = {
        let budget = budget.clone();
        Callback::from(move |draft: ExpenseDraft| {
            budget.dispatch(BudgetAction::ExpenseDraftEdited(draft))
        })
    };

    let on_add_expense = {
        let budget = budget.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let budget = budget.clone();
            spawn_local(async move {
                let request = budget.expense_draft.to_request();
                match api::create_expense(&request).await {
                    Ok(()) => {
                        budget.dispatch(BudgetAction::ExpenseDraftSaved);
                        refresh_expenses(&budget).await;
                    }
                    Err(err) => error!(format!("failed to add expense: {}", err)),
                }
            });
        })
    };

    let on_delete_expense = {
        let budget = budget.clone();
        Callback::from(move |id: i64| {
            let budget = budget.clone();
            spawn_local(async move {
                match api::delete_expense(id).await {
                    Ok(()) => refresh_expenses(&budget).await,
                    Err(err) => error!(format!("failed to delete expense {}: {}", id, err)),
                }
            });
        })
    };

    let on_edit_debt_draft = {
        let budget = budget.clone();
        Callback::from(move |draft: DebtDraft| {
            budget.dispatch(BudgetAction::DebtDraftEdited(draft))
        })
    };

    let on_add_debt = {
        let budget = budget.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let budget = budget.clone();
            spawn_local(async move {
                let request = budget.debt_draft.to_request();
                match api::create_debt(&request).await {
                    Ok(()) => {
                        budget.dispatch(BudgetAction::DebtDraftSaved);
                        refresh_debts(&budget).await;
                    }
                    Err(err) => error!(format!("failed to add debt: {}", err)),
                }
            });
        })
    };

    let on_delete_debt = {
        let budget = budget.clone();
        Callback::from(move |id: i64| {
            let budget = budget.clone();
            spawn_local(async move {
                match api::delete_debt(id).await {
                    Ok(()) => refresh_debts(&budget).await,
                    Err(err) => error!(format!("failed to delete debt {}: {}", id, err)),
                }
            });
        })
    };

    let on_edit_reflection = {
        let budget = budget.clone();
        Callback::from(move |text: String| budget.dispatch(BudgetAction::ReflectionEdited(text)))
    };

    html! {
        <div class="min-h-screen bg-slate-100">
            <header class="bg-[#173E63] text-white px-6 py-8 text-center shadow-md">
                <h1 class="text-3xl font-black tracking-tight">{"Budget Journal"}</h1>
                <p class="text-sm text-slate-300 mt-2">{"Track your expenses and manage your debts"}</p>
            </header>

            <main class="max-w-7xl mx-auto p-6">
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                    <ExpenseCard
                        draft={budget.expense_draft.clone()}
                        expenses={budget.expenses.clone()}
                        on_edit={on_edit_expense_draft}
                        on_submit={on_add_expense}
                        on_delete={on_delete_expense}
                    />
                    <DebtCard
                        draft={budget.debt_draft.clone()}
                        debts={budget.debts.clone()}
                        on_edit={on_edit_debt_draft}
                        on_submit={on_add_debt}
                        on_delete={on_delete_debt}
                    />
                    <ReviewCard expenses={budget.expenses.clone()} />
                    <ReflectionCard reflection={budget.reflection.clone()} on_edit={on_edit_reflection} />
                </div>
            </main>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ExpenseCardProps {
    draft: ExpenseDraft,
    expenses: Vec<Expense>,
    on_edit: Callback<ExpenseDraft>,
    on_submit: Callback<SubmitEvent>,
    on_delete: Callback<i64>,
}

#[function_component(ExpenseCard)]
fn expense_card(props: &ExpenseCardProps) -> Html {
    let on_date = {
        let on_edit = props.on_edit.clone();
        let draft = props.draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_edit.emit(ExpenseDraft {
                date: input.value(),
                ..draft.clone()
            });
        })
    };
    let on_description = {
        let on_edit = props.on_edit.clone();
        let draft = props.draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_edit.emit(ExpenseDraft {
                description: input.value(),
                ..draft.clone()
            });
        })
    };
    let on_category = {
        let on_edit = props.on_edit.clone();
        let draft = props.draft.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_edit.emit(ExpenseDraft {
                category: Category::from_code(&select.value()).unwrap_or_default(),
                ..draft.clone()
            });
        })
    };
    let on_amount = {
        let on_edit = props.on_edit.clone();
        let draft = props.draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_edit.emit(ExpenseDraft {
                amount: input.value(),
                ..draft.clone()
            });
        })
    };

    html! {
        <div class="bg-white rounded-[10px] shadow-sm border border-slate-200 p-6">
            <h2 class="text-lg font-bold text-[#173E63] mb-4">{"Expense Tracker"}</h2>
            <form class="grid grid-cols-1 md:grid-cols-5 gap-3 mb-4" onsubmit={props.on_submit.clone()}>
                <input type="date" value={props.draft.date.clone()} oninput={on_date}
                    required={true}
                    class="p-2 bg-slate-50 border border-slate-200 rounded-lg text-sm" />
                <input type="text" placeholder="Description" value={props.draft.description.clone()} oninput={on_description}
                    required={true}
                    class="p-2 bg-slate-50 border border-slate-200 rounded-lg text-sm" />
                <select onchange={on_category}
                    class="p-2 bg-slate-50 border border-slate-200 rounded-lg text-sm">
                    { for Category::ALL.iter().map(|category| html! {
                        <option value={category.code()} selected={*category == props.draft.category}>
                            { category.label() }
                        </option>
                    }) }
                </select>
                <input type="number" step="0.01" placeholder="Amount" value={props.draft.amount.clone()} oninput={on_amount}
                    required={true}
                    class="p-2 bg-slate-50 border border-slate-200 rounded-lg text-sm" />
                <button type="submit" class="bg-[#173E63] text-white px-4 py-2 rounded-lg text-sm font-bold hover:opacity-90 transition-all">
                    {"Add Expense"}
                </button>
            </form>

            <div class="overflow-x-auto">
                <table class="w-full text-left border-collapse">
                    <thead>
                        <tr class="bg-slate-50 text-slate-500 text-[10px] uppercase tracking-widest">
                            <th class="px-4 py-3 font-bold">{"Date"}</th>
                            <th class="px-4 py-3 font-bold">{"Description"}</th>
                            <th class="px-4 py-3 font-bold">{"Category"}</th>
                            <th class="px-4 py-3 font-bold text-right">{"Amount"}</th>
                            <th class="px-4 py-3 font-bold">{"Action"}</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-slate-100">
                        { if props.expenses.is_empty() {
                            html! {
                                <tr><td colspan="5" class="px-4 py-6 text-center text-slate-400 text-sm">
                                    {"No expenses yet. Add your first expense above!"}
                                </td></tr>
                            }
                        } else {
                            html! {
                                <>
                                    { for props.expenses.iter().map(|expense| {
                                        let on_delete = props.on_delete.clone();
                                        let id = expense.id;
                                        let on_click = Callback::from(move |_| on_delete.emit(id));
                                        html! {
                                            <tr key={expense.id} class="text-sm hover:bg-slate-50 transition-colors">
                                                <td class="px-4 py-3 text-slate-500">{ expense.date.clone() }</td>
                                                <td class="px-4 py-3 text-slate-700">{ expense.description.clone() }</td>
                                                <td class="px-4 py-3">
                                                    <span class="bg-slate-100 text-slate-600 px-2.5 py-1 rounded-full text-[10px] font-bold">
                                                        { expense.category.code() }
                                                    </span>
                                                </td>
                                                <td class="px-4 py-3 text-right font-semibold text-slate-700">{ format_amount(expense.amount) }</td>
                                                <td class="px-4 py-3">
                                                    <button onclick={on_click} class="bg-red-600 text-white px-3 py-1 rounded-lg text-xs font-bold hover:opacity-90 transition-all">
                                                        {"Delete"}
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    }) }
                                </>
                            }
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct DebtCardProps {
    draft: DebtDraft,
    debts: Vec<model::Debt>,
    on_edit: Callback<DebtDraft>,
    on_submit: Callback<SubmitEvent>,
    on_delete: Callback<i64>,
}

#[function_component(DebtCard)]
fn debt_card(props: &DebtCardProps) -> Html {
    let on_name = {
        let on_edit = props.on_edit.clone();
        let draft = props.draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_edit.emit(DebtDraft {
                name: input.value(),
                ..draft.clone()
            });
        })
    };
    let on_amount_needed = {
        let on_edit = props.on_edit.clone();
        let draft = props.draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_edit.emit(DebtDraft {
                amount_needed: input.value(),
                ..draft.clone()
            });
        })
    };
    let on_minimum_payment = {
        let on_edit = props.on_edit.clone();
        let draft = props.draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_edit.emit(DebtDraft {
                minimum_payment: input.value(),
                ..draft.clone()
            });
        })
    };

    html! {
        <div class="bg-white rounded-[10px] shadow-sm border border-slate-200 p-6">
            <h2 class="text-lg font-bold text-[#173E63] mb-4">{"Debt Tracker"}</h2>
            <form class="grid grid-cols-1 md:grid-cols-4 gap-3 mb-4" onsubmit={props.on_submit.clone()}>
                <input type="text" placeholder="Name" value={props.draft.name.clone()} oninput={on_name}
                    required={true}
                    class="p-2 bg-slate-50 border border-slate-200 rounded-lg text-sm" />
                <input type="number" step="0.01" placeholder="Amount Needed" value={props.draft.amount_needed.clone()} oninput={on_amount_needed}
                    required={true}
                    class="p-2 bg-slate-50 border border-slate-200 rounded-lg text-sm" />
                <input type="number" step="0.01" placeholder="Minimum Payment" value={props.draft.minimum_payment.clone()} oninput={on_minimum_payment}
                    required={true}
                    class="p-2 bg-slate-50 border border-slate-200 rounded-lg text-sm" />
                <button type="submit" class="bg-[#173E63] text-white px-4 py-2 rounded-lg text-sm font-bold hover:opacity-90 transition-all">
                    {"Add Debt"}
                </button>
            </form>

            <div class="overflow-x-auto">
                <table class="w-full text-left border-collapse">
                    <thead>
                        <tr class="bg-slate-50 text-slate-500 text-[10px] uppercase tracking-widest">
                            <th class="px-4 py-3 font-bold">{"Name"}</th>
                            <th class="px-4 py-3 font-bold text-right">{"Amount Needed"}</th>
                            <th class="px-4 py-3 font-bold text-right">{"Min Payment"}</th>
                            <th class="px-4 py-3 font-bold">{"Action"}</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-slate-100">
                        { if props.debts.is_empty() {
                            html! {
                                <tr><td colspan="4" class="px-4 py-6 text-center text-slate-400 text-sm">
                                    {"No debts tracked. Add your first debt above!"}
                                </td></tr>
                            }
                        } else {
                            html! {
                                <>
                                    { for props.debts.iter().map(|debt| {
                                        let on_delete = props.on_delete.clone();
                                        let id = debt.id;
                                        let on_click = Callback::from(move |_| on_delete.emit(id));
                                        html! {
                                            <tr key={debt.id} class="text-sm hover:bg-slate-50 transition-colors">
                                                <td class="px-4 py-3 text-slate-700">{ debt.name.clone() }</td>
                                                <td class="px-4 py-3 text-right font-semibold text-slate-700">{ format_amount(debt.amount_needed) }</td>
                                                <td class="px-4 py-3 text-right text-slate-500">{ format_amount(debt.minimum_payment) }</td>
                                                <td class="px-4 py-3">
                                                    <button onclick={on_click} class="bg-red-600 text-white px-3 py-1 rounded-lg text-xs font-bold hover:opacity-90 transition-all">
                                                        {"Delete"}
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    }) }
                                </>
                            }
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ReviewCardProps {
    expenses: Vec<Expense>,
}

#[function_component(ReviewCard)]
fn review_card(props: &ReviewCardProps) -> Html {
    let totals = summary::category_totals(&props.expenses);
    let slices = summary::chart_slices(&totals);
    let total = summary::grand_total(&props.expenses);

    html! {
        <div class="bg-white rounded-[10px] shadow-sm border border-slate-200 p-6">
            <h2 class="text-lg font-bold text-[#173E63] mb-4">{"Monthly Budget Review"}</h2>
            <div class="mb-4">
                <h3 class="text-xl font-bold text-slate-700">
                    { format!("Total Expenses: {}", format_amount(total)) }
                </h3>
            </div>
            { if props.expenses.is_empty() {
                html! {
                    <p class="text-center text-slate-400 text-sm py-6">
                        {"No expense data to display in the chart yet."}
                    </p>
                }
            } else {
                html! { <PieChart slices={slices} /> }
            }}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ReflectionCardProps {
    reflection: String,
    on_edit: Callback<String>,
}

#[function_component(ReflectionCard)]
fn reflection_card(props: &ReflectionCardProps) -> Html {
    let on_input = {
        let on_edit = props.on_edit.clone();
        Callback::from(move |e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            on_edit.emit(textarea.value());
        })
    };

    html! {
        <div class="bg-white rounded-[10px] shadow-sm border border-slate-200 p-6">
            <h2 class="text-lg font-bold text-[#173E63] mb-4">{"Monthly Reflection"}</h2>
            <textarea rows="10" placeholder="Write your monthly reflection here..."
                value={props.reflection.clone()} oninput={on_input}
                class="w-full p-3 bg-slate-50 border border-slate-200 rounded-lg text-sm text-slate-700 resize-y" />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::format_amount;

    #[test]
    fn amounts_display_with_two_decimals() {
        assert_eq!(format_amount(0.0), "$0.00");
        assert_eq!(format_amount(175.0), "$175.00");
        assert_eq!(format_amount(12.5), "$12.50");
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
