use shared::domain::Food;

/// The single food currently targeted for editing, if any.
#[derive(Debug, Clone, Default)]
pub struct EditSession {
    target: Option<Food>,
}

impl EditSession {
    /// Starts editing `food`, discarding any previous target.
    pub fn begin(&mut self, food: Food) {
        self.target = Some(food);
    }

    pub fn current(&self) -> Option<&Food> {
        self.target.as_ref()
    }

    pub fn end(&mut self) -> Option<Food> {
        self.target.take()
    }
}

#[cfg(test)]
mod tests {
    use shared::domain::FoodId;

    use super::*;

    fn food(id: i64) -> Food {
        Food {
            id: FoodId(id),
            name: format!("food-{id}"),
            description: String::new(),
            price: 1.0,
            available: true,
            image: String::new(),
        }
    }

    #[test]
    fn begin_overwrites_previous_target() {
        let mut session = EditSession::default();
        assert!(session.current().is_none());

        session.begin(food(1));
        session.begin(food(2));
        assert_eq!(session.current().map(|f| f.id), Some(FoodId(2)));
    }

    #[test]
    fn end_clears_the_target() {
        let mut session = EditSession::default();
        session.begin(food(1));

        assert_eq!(session.end().map(|f| f.id), Some(FoodId(1)));
        assert!(session.current().is_none());
        assert!(session.end().is_none());
    }
}
