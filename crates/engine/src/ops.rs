//! Pure collection transitions for the store.
//!
//! Every mutation is a total replacement step `(old, change) -> new`: the
//! input slice is never modified, the returned `Vec` is the next canonical
//! collection. Validation happens here, at the save boundary; aggregation
//! stays arithmetic-only.
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{EngineError, Expense, Ingredient, ResultEngine, Sale};

fn ensure_named(value: &str, what: &str) -> ResultEngine<()> {
    if value.trim().is_empty() {
        return Err(EngineError::InvalidName(format!("{what} must not be empty")));
    }
    Ok(())
}

fn ensure_new_id<T>(current: &[T], id: Uuid, get_id: impl Fn(&T) -> Uuid) -> ResultEngine<()> {
    if current.iter().any(|item| get_id(item) == id) {
        return Err(EngineError::ExistingKey(id.to_string()));
    }
    Ok(())
}

fn replace_by_id<T: Clone>(
    current: &[T],
    id: Uuid,
    get_id: impl Fn(&T) -> Uuid,
    replacement: T,
) -> ResultEngine<Vec<T>> {
    if !current.iter().any(|item| get_id(item) == id) {
        return Err(EngineError::KeyNotFound(id.to_string()));
    }
    Ok(current
        .iter()
        .map(|item| {
            if get_id(item) == id {
                replacement.clone()
            } else {
                item.clone()
            }
        })
        .collect())
}

fn remove_by_id<T: Clone>(
    current: &[T],
    id: Uuid,
    get_id: impl Fn(&T) -> Uuid,
) -> ResultEngine<Vec<T>> {
    if !current.iter().any(|item| get_id(item) == id) {
        return Err(EngineError::KeyNotFound(id.to_string()));
    }
    Ok(current
        .iter()
        .filter(|item| get_id(item) != id)
        .cloned()
        .collect())
}

pub fn add_ingredient(current: &[Ingredient], ingredient: Ingredient) -> ResultEngine<Vec<Ingredient>> {
    ensure_named(&ingredient.name, "ingredient name")?;
    ensure_new_id(current, ingredient.id, |i| i.id)?;
    let mut next = current.to_vec();
    next.push(ingredient);
    Ok(next)
}

/// Replaces the ingredient with the same id, refreshing `last_updated`.
pub fn update_ingredient(
    current: &[Ingredient],
    mut updated: Ingredient,
    now: DateTime<Utc>,
) -> ResultEngine<Vec<Ingredient>> {
    ensure_named(&updated.name, "ingredient name")?;
    updated.last_updated = now;
    replace_by_id(current, updated.id, |i| i.id, updated)
}

pub fn remove_ingredient(current: &[Ingredient], id: Uuid) -> ResultEngine<Vec<Ingredient>> {
    remove_by_id(current, id, |i| i.id)
}

pub fn add_expense(current: &[Expense], expense: Expense) -> ResultEngine<Vec<Expense>> {
    ensure_named(&expense.description, "expense description")?;
    if expense.amount.is_negative() {
        return Err(EngineError::InvalidAmount(
            "expense amount must be >= 0".to_string(),
        ));
    }
    ensure_new_id(current, expense.id, |e| e.id)?;
    let mut next = current.to_vec();
    next.push(expense);
    Ok(next)
}

pub fn update_expense(current: &[Expense], updated: Expense) -> ResultEngine<Vec<Expense>> {
    ensure_named(&updated.description, "expense description")?;
    if updated.amount.is_negative() {
        return Err(EngineError::InvalidAmount(
            "expense amount must be >= 0".to_string(),
        ));
    }
    replace_by_id(current, updated.id, |e| e.id, updated)
}

pub fn remove_expense(current: &[Expense], id: Uuid) -> ResultEngine<Vec<Expense>> {
    remove_by_id(current, id, |e| e.id)
}

/// Appends a sale. The total/items invariant is already established by the
/// `Sale` constructors, so only emptiness is re-checked here.
pub fn add_sale(current: &[Sale], sale: Sale) -> ResultEngine<Vec<Sale>> {
    if sale.items.is_empty() {
        return Err(EngineError::EmptySale);
    }
    ensure_new_id(current, sale.id, |s| s.id)?;
    let mut next = current.to_vec();
    next.push(sale);
    Ok(next)
}

pub fn update_sale(current: &[Sale], updated: Sale) -> ResultEngine<Vec<Sale>> {
    if updated.items.is_empty() {
        return Err(EngineError::EmptySale);
    }
    replace_by_id(current, updated.id, |s| s.id, updated)
}

pub fn remove_sale(current: &[Sale], id: Uuid) -> ResultEngine<Vec<Sale>> {
    remove_by_id(current, id, |s| s.id)
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::Money;

    fn ingredient(name: &str) -> Ingredient {
        Ingredient::new(name, "Vegetables", 5.0, "kg", Money::new(3_50), 10.0, Utc::now())
    }

    #[test]
    fn add_does_not_mutate_input() {
        let before = vec![ingredient("Tomatoes")];
        let after = add_ingredient(&before, ingredient("Garlic")).unwrap();
        assert_eq!(before.len(), 1);
        assert_eq!(after.len(), 2);
        assert_eq!(after[0].name, "Tomatoes");
    }

    #[test]
    fn add_rejects_duplicate_id() {
        let existing = ingredient("Tomatoes");
        let current = vec![existing.clone()];
        let err = add_ingredient(&current, existing).unwrap_err();
        assert!(matches!(err, EngineError::ExistingKey(_)));
    }

    #[test]
    fn add_rejects_blank_name() {
        let err = add_ingredient(&[], ingredient("   ")).unwrap_err();
        assert!(matches!(err, EngineError::InvalidName(_)));
    }

    #[test]
    fn update_replaces_by_id_and_touches_timestamp() {
        let original = ingredient("Tomatoes");
        let stale = original.last_updated;
        let current = vec![original.clone(), ingredient("Basil")];

        let mut updated = original;
        updated.quantity = 30.0;
        let later = stale + chrono::Duration::seconds(60);
        let next = update_ingredient(&current, updated, later).unwrap();

        assert_eq!(next.len(), 2);
        assert_eq!(next[0].quantity, 30.0);
        assert_eq!(next[0].last_updated, later);
        assert_eq!(next[1].name, "Basil");
    }

    #[test]
    fn update_unknown_id_fails() {
        let current = vec![ingredient("Tomatoes")];
        let stray = ingredient("Ghost");
        let err = update_ingredient(&current, stray, Utc::now()).unwrap_err();
        assert!(matches!(err, EngineError::KeyNotFound(_)));
    }

    #[test]
    fn remove_filters_exactly_one() {
        let a = ingredient("Tomatoes");
        let b = ingredient("Basil");
        let id = a.id;
        let next = remove_ingredient(&[a, b], id).unwrap();
        assert_eq!(next.len(), 1);
        assert_eq!(next[0].name, "Basil");
    }

    #[test]
    fn remove_unknown_id_fails() {
        let err = remove_sale(&[], uuid::Uuid::new_v4()).unwrap_err();
        assert!(matches!(err, EngineError::KeyNotFound(_)));
    }

    #[test]
    fn negative_expense_amount_is_rejected() {
        let expense = Expense::new("refund?", "Other", Money::new(-1_00), Utc::now());
        let err = add_expense(&[], expense).unwrap_err();
        assert!(matches!(err, EngineError::InvalidAmount(_)));
    }
}
