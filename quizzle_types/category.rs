/// A quiz category as offered by the leaderboard picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Category {
    pub id: u32,
    pub name: &'static str,
}

impl Category {
    pub const ALL: Category = Category { id: 0, name: "All" };

    pub const ALL_CATEGORIES: [Category; 11] = [
        Category::ALL,
        Category { id: 10, name: "Books" },
        Category { id: 11, name: "Films" },
        Category { id: 12, name: "Music" },
        Category { id: 14, name: "Television" },
        Category { id: 17, name: "Science & Nature" },
        Category { id: 18, name: "Computers" },
        Category { id: 19, name: "Mathematics" },
        Category { id: 21, name: "Sports" },
        Category { id: 22, name: "Geography" },
        Category { id: 23, name: "History" },
    ];

    pub fn by_id(id: u32) -> Option<Category> {
        Self::ALL_CATEGORIES.iter().copied().find(|c| c.id == id)
    }

    /// Display name, falling back to the raw id for categories the picker
    /// does not know about.
    pub fn name_for(id: u32) -> String {
        match Self::by_id(id) {
            Some(category) => category.name.to_string(),
            None => format!("Category {id}"),
        }
    }
}
