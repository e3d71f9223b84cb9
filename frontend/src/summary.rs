use crate::model::{Category, Expense};

/// Slice colors for the pie chart. Colors are assigned by slice position,
/// not by category, so the slot a category lands in depends on which
/// categories currently have spending.
pub const CHART_COLORS: [&str; 8] = [
    "#FF6384", "#36A2EB", "#FFCE56", "#4BC0C0", "#9966FF", "#FF9F40", "#FF6384", "#C9CBCF",
];

#[derive(Clone, Debug, PartialEq)]
pub struct ChartSlice {
    pub category: Category,
    pub amount: f64,
    pub color: &'static str,
}

/// Sum of expense amounts per category, for all eight categories in their
/// fixed order. Categories without spending keep an explicit 0 entry.
pub fn category_totals(expenses: &[Expense]) -> Vec<(Category, f64)> {
    Category::ALL
        .iter()
        .map(|&category| {
            let total = expenses
                .iter()
                .filter(|e| e.category == category)
                .map(|e| e.amount)
                .sum();
            (category, total)
        })
        .collect()
}

pub fn grand_total(expenses: &[Expense]) -> f64 {
    expenses.iter().map(|e| e.amount).sum()
}

/// Chart input: the strictly-positive totals in the same iteration order,
/// each paired with the palette color for its slot.
pub fn chart_slices(totals: &[(Category, f64)]) -> Vec<ChartSlice> {
    totals
        .iter()
        .filter(|(_, total)| *total > 0.0)
        .enumerate()
        .map(|(slot, &(category, amount))| ChartSlice {
            category,
            amount,
            color: CHART_COLORS[slot],
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(id: i64, category: Category, amount: f64) -> Expense {
        Expense {
            id,
            date: "2026-03-01".into(),
            description: "test".into(),
            category,
            amount,
        }
    }

    fn sample() -> Vec<Expense> {
        vec![
            expense(1, Category::Food, 50.0),
            expense(2, Category::Food, 25.0),
            expense(3, Category::Housing, 100.0),
        ]
    }

    #[test]
    fn category_totals_sum_to_the_grand_total() {
        let expenses = vec![
            expense(1, Category::Housing, 900.0),
            expense(2, Category::Food, 63.25),
            expense(3, Category::Transport, 40.0),
            expense(4, Category::Food, 12.75),
            expense(5, Category::Other, 5.5),
        ];
        let totals = category_totals(&expenses);
        let sum: f64 = totals.iter().map(|(_, total)| total).sum();
        assert!((sum - grand_total(&expenses)).abs() < 1e-9);
    }

    #[test]
    fn adding_an_expense_moves_exactly_one_category() {
        let mut expenses = sample();
        let before = category_totals(&expenses);
        expenses.push(expense(4, Category::Health, 80.0));
        let after = category_totals(&expenses);

        for ((category, was), (_, now)) in before.iter().zip(after.iter()) {
            if *category == Category::Health {
                assert!((now - was - 80.0).abs() < 1e-9);
            } else {
                assert_eq!(was, now);
            }
        }
    }

    #[test]
    fn removing_a_lone_expense_empties_its_chart_slot() {
        let mut expenses = sample();
        expenses.retain(|e| e.category != Category::Housing);

        let totals = category_totals(&expenses);
        let housing = totals
            .iter()
            .find(|(category, _)| *category == Category::Housing)
            .unwrap();
        assert_eq!(housing.1, 0.0);

        let slices = chart_slices(&totals);
        assert!(slices.iter().all(|s| s.category != Category::Housing));
    }

    #[test]
    fn totals_ignore_input_order() {
        let expenses = sample();
        let mut reversed = expenses.clone();
        reversed.reverse();
        let mut rotated = expenses.clone();
        rotated.rotate_left(1);

        assert_eq!(category_totals(&expenses), category_totals(&reversed));
        assert_eq!(category_totals(&expenses), category_totals(&rotated));
    }

    #[test]
    fn mixed_expense_list_scenario() {
        let expenses = sample();
        let totals = category_totals(&expenses);

        assert_eq!(totals.len(), 8);
        for (category, total) in &totals {
            let expected = match category {
                Category::Housing => 100.0,
                Category::Food => 75.0,
                _ => 0.0,
            };
            assert_eq!(*total, expected);
        }
        assert_eq!(grand_total(&expenses), 175.0);

        // slices keep the fixed category order and take colors by slot
        let slices = chart_slices(&totals);
        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].category, Category::Housing);
        assert_eq!(slices[0].amount, 100.0);
        assert_eq!(slices[0].color, CHART_COLORS[0]);
        assert_eq!(slices[1].category, Category::Food);
        assert_eq!(slices[1].amount, 75.0);
        assert_eq!(slices[1].color, CHART_COLORS[1]);
    }

    #[test]
    fn empty_list_has_zero_totals_and_no_slices() {
        let totals = category_totals(&[]);
        assert_eq!(totals.len(), 8);
        assert!(totals.iter().all(|(_, total)| *total == 0.0));
        assert_eq!(grand_total(&[]), 0.0);
        assert!(chart_slices(&totals).is_empty());
    }

    #[test]
    fn color_slots_do_not_bind_to_categories() {
        // only TRANSPORT has spending, so it takes the first slot's color
        let expenses = vec![expense(1, Category::Transport, 30.0)];
        let slices = chart_slices(&category_totals(&expenses));
        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].category, Category::Transport);
        assert_eq!(slices[0].color, CHART_COLORS[0]);
    }
}
