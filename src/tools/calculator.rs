use crate::tools::registry::Tool;
use crate::types::{AppError, Result};
use async_trait::async_trait;

/// Evaluates an arithmetic expression such as `12*8` or `(2 + 3)^2 / 5`.
pub struct Calculator;

/// Evaluate `expression` and render the result.
///
/// Whole numbers are rendered without a fractional part (`"96"`, not `"96.0"`).
pub fn evaluate(expression: &str) -> Result<String> {
    let expression = expression.trim();
    if expression.is_empty() {
        return Err(AppError::Tool("Empty expression".to_string()));
    }

    let value = meval::eval_str(expression)
        .map_err(|e| AppError::Tool(format!("Calculation error: {}", e)))?;

    if !value.is_finite() {
        return Err(AppError::Tool(format!(
            "Expression '{}' has no finite result",
            expression
        )));
    }

    Ok(format_number(value))
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

#[async_trait]
impl Tool for Calculator {
    fn name(&self) -> &str {
        "calculator"
    }

    fn description(&self) -> &str {
        "Evaluate an arithmetic expression (+, -, *, /, %, ^, parentheses, sqrt/sin/cos/...)"
    }

    async fn execute(&self, input: &str) -> Result<String> {
        let expression = input.to_string();
        tokio::task::spawn_blocking(move || evaluate(&expression))
            .await
            .map_err(|e| AppError::Internal(format!("Calculator task failed: {}", e)))?
    }
}
