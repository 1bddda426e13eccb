use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use shared::{Transaction, TransactionKind};
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CategoryChartProps {
    pub transactions: Vec<Transaction>,
    pub loading: bool,
}

/// Sum expense amounts per category, largest first.
///
/// Income and unknown kinds are left out, and a malformed amount counts as
/// zero, so the chart shows exactly what the summary counts as expenses.
pub fn expense_totals(transactions: &[Transaction]) -> Vec<(String, f64)> {
    let mut totals: Vec<(String, f64)> = Vec::new();

    for transaction in transactions {
        if transaction.kind != TransactionKind::Expense {
            continue;
        }
        let value = transaction.amount.or_zero();
        if value <= 0.0 {
            continue;
        }
        match totals
            .iter_mut()
            .find(|(name, _)| *name == transaction.category)
        {
            Some((_, total)) => *total += value,
            None => totals.push((transaction.category.clone(), value)),
        }
    }

    totals.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    totals
}

/// Bar chart of spending per category, drawn onto a canvas with plotters.
pub struct CategoryChart {
    canvas_ref: NodeRef,
}

impl Component for CategoryChart {
    type Message = ();
    type Properties = CategoryChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            canvas_ref: NodeRef::default(),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().transactions != old_props.transactions {
            self.draw(ctx.props());
        }
        true
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        self.draw(ctx.props());
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let data = expense_totals(&ctx.props().transactions);

        if data.is_empty() && ctx.props().loading {
            return html! { <div class="chart-loading">{"Loading chart data..."}</div> };
        }
        if data.is_empty() {
            return html! {
                <div class="chart-empty">{"No expense data to chart yet."}</div>
            };
        }

        html! {
            <div class="chart-content">
                <canvas
                    ref={self.canvas_ref.clone()}
                    class="category-chart-canvas"
                    width="800"
                    height="350"
                ></canvas>
            </div>
        }
    }
}

impl CategoryChart {
    fn draw(&self, props: &CategoryChartProps) {
        let data = expense_totals(&props.transactions);
        if data.is_empty() {
            return;
        }

        let canvas = match self.canvas_ref.cast::<HtmlCanvasElement>() {
            Some(canvas) => canvas,
            None => return,
        };
        canvas.set_width(800);
        canvas.set_height(350);

        let backend = match CanvasBackend::with_canvas_object(canvas) {
            Some(backend) => backend,
            None => return,
        };

        let root = backend.into_drawing_area();
        if root.fill(&WHITE).is_err() {
            return;
        }

        let max_total = data.iter().map(|(_, total)| *total).fold(0.0f64, f64::max);
        let y_max = max_total * 1.1;

        let mut chart = match ChartBuilder::on(&root)
            .margin(15)
            .x_label_area_size(45)
            .y_label_area_size(70)
            .build_cartesian_2d(0f64..data.len() as f64, 0f64..y_max)
        {
            Ok(chart) => chart,
            Err(_) => return,
        };

        let labels: Vec<String> = data.iter().map(|(name, _)| name.clone()).collect();

        if chart
            .configure_mesh()
            .disable_x_mesh()
            .y_desc("Spent ($)")
            .y_label_formatter(&|value| format!("${:.0}", value))
            .x_label_formatter(&|x| labels.get(*x as usize).cloned().unwrap_or_default())
            .x_labels(data.len())
            .label_style(("sans-serif", 12, &RGBColor(102, 126, 234)))
            .axis_style(&RGBColor(230, 230, 230))
            .draw()
            .is_err()
        {
            return;
        }

        let bar_color = RGBColor(102, 126, 234);
        if chart
            .draw_series(data.iter().enumerate().map(|(i, (_, total))| {
                Rectangle::new(
                    [(i as f64 + 0.2, 0.0), (i as f64 + 0.8, *total)],
                    bar_color.filled(),
                )
            }))
            .is_err()
        {
            return;
        }

        let _ = root.present();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Amount;

    fn tx(id: i64, kind: TransactionKind, category: &str, amount: &str) -> Transaction {
        Transaction {
            id,
            title: format!("transaction {id}"),
            amount: Amount::new(amount),
            kind,
            category: category.to_string(),
            date: "2024-03-01".to_string(),
        }
    }

    #[test]
    fn test_expense_totals_group_by_category_largest_first() {
        let transactions = vec![
            tx(1, TransactionKind::Expense, "Groceries", "20"),
            tx(2, TransactionKind::Expense, "Rent", "800"),
            tx(3, TransactionKind::Expense, "Groceries", "35.50"),
        ];

        let totals = expense_totals(&transactions);
        assert_eq!(
            totals,
            vec![("Rent".to_string(), 800.0), ("Groceries".to_string(), 55.5)]
        );
    }

    #[test]
    fn test_expense_totals_skip_income_and_unknown() {
        let transactions = vec![
            tx(1, TransactionKind::Income, "Salary", "2000"),
            tx(2, TransactionKind::Unknown, "???", "50"),
            tx(3, TransactionKind::Expense, "Transport", "12"),
        ];

        let totals = expense_totals(&transactions);
        assert_eq!(totals, vec![("Transport".to_string(), 12.0)]);
    }

    #[test]
    fn test_expense_totals_drop_malformed_amounts() {
        let transactions = vec![
            tx(1, TransactionKind::Expense, "Utilities", "oops"),
            tx(2, TransactionKind::Expense, "Utilities", "30"),
        ];

        let totals = expense_totals(&transactions);
        assert_eq!(totals, vec![("Utilities".to_string(), 30.0)]);
    }

    #[test]
    fn test_expense_totals_of_empty_input() {
        assert!(expense_totals(&[]).is_empty());
    }

    #[test]
    fn test_draw_handles_empty_transactions() {
        let chart = CategoryChart {
            canvas_ref: NodeRef::default(),
        };
        let props = CategoryChartProps {
            transactions: vec![],
            loading: false,
        };
        // Must bail out before touching the canvas.
        chart.draw(&props);
    }
}

#[cfg(test)]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_component_draw_without_canvas_in_wasm() {
        let chart = CategoryChart {
            canvas_ref: NodeRef::default(),
        };
        let props = CategoryChartProps {
            transactions: vec![],
            loading: false,
        };
        chart.draw(&props);
    }
}
