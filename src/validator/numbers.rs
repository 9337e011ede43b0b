//! Rule checking for written numbers answers

use super::InvalidReason;
use crate::core::{Expr, IllegalStep, NumberDraw, NumbersAnswer, WrittenStep};

/// Check an answer against the draw and return the value it reaches
///
/// Expressions may use each drawn number at most as often as it was drawn.
/// Step lists additionally make each step's result available, once, to
/// later steps; the answer's value is the last step's result.
pub(super) fn check(answer: &str, draw: &NumberDraw) -> Result<u32, InvalidReason> {
    let parsed =
        NumbersAnswer::parse(answer).map_err(|e| InvalidReason::Unparseable(e.to_string()))?;
    match parsed {
        NumbersAnswer::Expression(expr) => check_expression(&expr, draw),
        NumbersAnswer::Steps(steps) => check_steps(&steps, draw),
    }
}

fn check_expression(expr: &Expr, draw: &NumberDraw) -> Result<u32, InvalidReason> {
    let mut pool = draw.numbers().to_vec();
    for leaf in expr.leaves() {
        take(&mut pool, leaf)?;
    }
    expr.evaluate()
        .map_err(|step| InvalidReason::IllegalStep(step.to_string()))
}

fn check_steps(steps: &[WrittenStep], draw: &NumberDraw) -> Result<u32, InvalidReason> {
    let mut pool = draw.numbers().to_vec();
    let mut last = None;

    for step in steps {
        take(&mut pool, step.left)?;
        take(&mut pool, step.right)?;

        let written = IllegalStep {
            left: step.left,
            op: step.op,
            right: step.right,
        };
        let result = step
            .op
            .apply(step.left, step.right)
            .ok_or_else(|| InvalidReason::IllegalStep(written.to_string()))?;
        if let Some(stated) = step.stated
            && stated != result
        {
            return Err(InvalidReason::WrongResult {
                step: written.to_string(),
                stated,
                actual: result,
            });
        }

        pool.push(result);
        last = Some(result);
    }

    last.ok_or_else(|| InvalidReason::Unparseable("no steps".to_string()))
}

/// Remove one instance of `number` from the pool
fn take(pool: &mut Vec<u32>, number: u32) -> Result<(), InvalidReason> {
    let at = pool
        .iter()
        .position(|&n| n == number)
        .ok_or(InvalidReason::NumberUnavailable(number))?;
    pool.swap_remove(at);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw(numbers: &[u32], target: u32) -> NumberDraw {
        NumberDraw::custom(numbers.to_vec(), target).unwrap()
    }

    #[test]
    fn expression_within_draw() {
        assert_eq!(check("3*5+2", &draw(&[2, 3, 4, 5], 17)), Ok(17));
        assert_eq!(check("(4 - 2) * 5", &draw(&[2, 3, 4, 5], 17)), Ok(10));
    }

    #[test]
    fn single_number_answer() {
        assert_eq!(check("100", &draw(&[100, 2], 101)), Ok(100));
    }

    #[test]
    fn expression_reuses_number() {
        assert_eq!(
            check("5 * 5", &draw(&[2, 3, 4, 5], 25)),
            Err(InvalidReason::NumberUnavailable(5))
        );
    }

    #[test]
    fn expression_with_duplicates_in_draw() {
        assert_eq!(check("5 * 5", &draw(&[5, 5, 1], 25)), Ok(25));
    }

    #[test]
    fn expression_breaking_rules() {
        assert_eq!(
            check("(2 - 3) + 5", &draw(&[2, 3, 5], 4)),
            Err(InvalidReason::IllegalStep("2 - 3".to_string()))
        );
        assert_eq!(
            check("5 / 2", &draw(&[2, 3, 5], 4)),
            Err(InvalidReason::IllegalStep("5 / 2".to_string()))
        );
    }

    #[test]
    fn steps_reuse_intermediate_results() {
        assert_eq!(check("3 * 5 = 15, 15 + 2 = 17", &draw(&[2, 3, 4, 5], 17)), Ok(17));
    }

    #[test]
    fn steps_cannot_reuse_a_result_twice() {
        assert_eq!(
            check("3 * 5 = 15, 15 + 15 = 30", &draw(&[2, 3, 4, 5], 30)),
            Err(InvalidReason::NumberUnavailable(15))
        );
    }

    #[test]
    fn steps_with_wrong_stated_result() {
        assert_eq!(
            check("3 * 5 = 16", &draw(&[2, 3, 4, 5], 16)),
            Err(InvalidReason::WrongResult {
                step: "3 * 5".to_string(),
                stated: 16,
                actual: 15
            })
        );
    }

    #[test]
    fn steps_with_zero_result() {
        assert!(matches!(
            check("3 - 3 = 0", &draw(&[3, 3], 10)),
            Err(InvalidReason::IllegalStep(_))
        ));
    }

    #[test]
    fn unparseable_answer() {
        assert!(matches!(
            check("three plus five", &draw(&[3, 5], 8)),
            Err(InvalidReason::Unparseable(_))
        ));
    }
}
