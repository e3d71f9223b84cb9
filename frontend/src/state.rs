use std::rc::Rc;

use yew::prelude::*;

use crate::model::{Debt, DebtDraft, Expense, ExpenseDraft};

/// In-memory mirror of the remote collections plus unsaved form state.
/// Collections only change when a fetch succeeds; a failed call dispatches
/// nothing, so prior state survives by construction.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct BudgetState {
    pub expenses: Vec<Expense>,
    pub debts: Vec<Debt>,
    pub reflection: String,
    pub expense_draft: ExpenseDraft,
    pub debt_draft: DebtDraft,
}

pub enum BudgetAction {
    ExpensesFetched(Vec<Expense>),
    DebtsFetched(Vec<Debt>),
    ExpenseDraftEdited(ExpenseDraft),
    DebtDraftEdited(DebtDraft),
    ExpenseDraftSaved,
    DebtDraftSaved,
    ReflectionEdited(String),
}

impl Reducible for BudgetState {
    type Action = BudgetAction;

    fn reduce(self: Rc<Self>, action: BudgetAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            BudgetAction::ExpensesFetched(expenses) => next.expenses = expenses,
            BudgetAction::DebtsFetched(debts) => next.debts = debts,
            BudgetAction::ExpenseDraftEdited(draft) => next.expense_draft = draft,
            BudgetAction::DebtDraftEdited(draft) => next.debt_draft = draft,
            BudgetAction::ExpenseDraftSaved => next.expense_draft = ExpenseDraft::default(),
            BudgetAction::DebtDraftSaved => next.debt_draft = DebtDraft::default(),
            BudgetAction::ReflectionEdited(text) => next.reflection = text,
        }
        next.into()
    }
}
