mod data;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Errors raised while building or querying the recipe catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("no recipe named '{0}'")]
    NotFound(String),
    #[error("'{query}' matches several recipes: {}", .candidates.join(", "))]
    Ambiguous {
        query: String,
        candidates: Vec<String>,
    },
    #[error("recipe '{0}' appears more than once")]
    DuplicateRecipe(String),
    #[error("recipe '{recipe}' declares {declared} steps but has {actual}")]
    StepCountMismatch {
        recipe: String,
        declared: usize,
        actual: usize,
    },
    #[error("recipe '{0}' must serve at least one person")]
    InvalidServings(String),
    #[error("unknown difficulty '{0}'")]
    UnknownDifficulty(String),
}

/// How demanding a recipe is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(CatalogError::UnknownDifficulty(s.to_string())),
        }
    }
}

/// One numbered instruction within a recipe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeStep {
    title: String,
    image_ref: String,
    description: String,
    uses_timer: bool,
    timer_seconds: u32,
}

impl RecipeStep {
    pub fn new(
        title: impl Into<String>,
        image_ref: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            image_ref: image_ref.into(),
            description: description.into(),
            uses_timer: false,
            timer_seconds: 0,
        }
    }

    /// Attach a countdown of `seconds` to this step.
    pub fn with_timer(mut self, seconds: u32) -> Self {
        self.uses_timer = true;
        self.timer_seconds = seconds;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn image_ref(&self) -> &str {
        &self.image_ref
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn uses_timer(&self) -> bool {
        self.uses_timer
    }

    /// Zero for steps without a timer.
    pub fn timer_seconds(&self) -> u32 {
        if self.uses_timer {
            self.timer_seconds
        } else {
            0
        }
    }
}

/// A recipe and its ordered steps. Built through [`RecipeBuilder`], which
/// guarantees `steps().len() == number_of_steps()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    name: String,
    ingredients_text: String,
    image_ref: String,
    difficulty: Difficulty,
    cook_time_minutes: u32,
    calories: u32,
    servings: u32,
    vegetarian: bool,
    lactose_free: bool,
    gluten_free: bool,
    steps: Vec<RecipeStep>,
}

impl Recipe {
    pub fn builder(name: impl Into<String>) -> RecipeBuilder {
        RecipeBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw comma-separated ingredient list.
    pub fn ingredients_text(&self) -> &str {
        &self.ingredients_text
    }

    /// Ingredient list split on commas, trimmed, without empty entries.
    pub fn ingredients(&self) -> Vec<&str> {
        self.ingredients_text
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .collect()
    }

    pub fn image_ref(&self) -> &str {
        &self.image_ref
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn cook_time_minutes(&self) -> u32 {
        self.cook_time_minutes
    }

    pub fn calories(&self) -> u32 {
        self.calories
    }

    pub fn servings(&self) -> u32 {
        self.servings
    }

    pub fn vegetarian(&self) -> bool {
        self.vegetarian
    }

    pub fn lactose_free(&self) -> bool {
        self.lactose_free
    }

    pub fn gluten_free(&self) -> bool {
        self.gluten_free
    }

    pub fn steps(&self) -> &[RecipeStep] {
        &self.steps
    }

    pub fn number_of_steps(&self) -> usize {
        self.steps.len()
    }

    /// Badges for the dietary flags that are set.
    pub fn dietary_labels(&self) -> Vec<&'static str> {
        let mut labels = Vec::new();
        if self.vegetarian {
            labels.push("Vegetarian");
        }
        if self.lactose_free {
            labels.push("Lactose Free");
        }
        if self.gluten_free {
            labels.push("Gluten Free");
        }
        labels
    }

    /// e.g. "4 steps"
    pub fn steps_label(&self) -> String {
        match self.steps.len() {
            1 => "1 step".to_string(),
            n => format!("{n} steps"),
        }
    }
}

/// Validating constructor for [`Recipe`].
#[derive(Debug, Clone)]
pub struct RecipeBuilder {
    name: String,
    ingredients_text: String,
    image_ref: String,
    difficulty: Difficulty,
    cook_time_minutes: u32,
    calories: u32,
    servings: u32,
    vegetarian: bool,
    lactose_free: bool,
    gluten_free: bool,
    declared_steps: Option<usize>,
    steps: Vec<RecipeStep>,
}

impl RecipeBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ingredients_text: String::new(),
            image_ref: String::new(),
            difficulty: Difficulty::Easy,
            cook_time_minutes: 0,
            calories: 0,
            servings: 1,
            vegetarian: false,
            lactose_free: false,
            gluten_free: false,
            declared_steps: None,
            steps: Vec::new(),
        }
    }

    pub fn ingredients(mut self, text: impl Into<String>) -> Self {
        self.ingredients_text = text.into();
        self
    }

    pub fn image(mut self, image_ref: impl Into<String>) -> Self {
        self.image_ref = image_ref.into();
        self
    }

    pub fn difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn cook_time_minutes(mut self, minutes: u32) -> Self {
        self.cook_time_minutes = minutes;
        self
    }

    pub fn calories(mut self, kcal: u32) -> Self {
        self.calories = kcal;
        self
    }

    pub fn servings(mut self, servings: u32) -> Self {
        self.servings = servings;
        self
    }

    pub fn vegetarian(mut self, yes: bool) -> Self {
        self.vegetarian = yes;
        self
    }

    pub fn lactose_free(mut self, yes: bool) -> Self {
        self.lactose_free = yes;
        self
    }

    pub fn gluten_free(mut self, yes: bool) -> Self {
        self.gluten_free = yes;
        self
    }

    /// Declare how many steps the recipe has. Checked against the steps
    /// actually added when the recipe is built.
    pub fn number_of_steps(mut self, count: usize) -> Self {
        self.declared_steps = Some(count);
        self
    }

    pub fn step(mut self, step: RecipeStep) -> Self {
        self.steps.push(step);
        self
    }

    pub fn steps(mut self, steps: impl IntoIterator<Item = RecipeStep>) -> Self {
        self.steps.extend(steps);
        self
    }

    pub fn build(self) -> Result<Recipe, CatalogError> {
        if self.servings == 0 {
            return Err(CatalogError::InvalidServings(self.name));
        }
        if let Some(declared) = self.declared_steps {
            if declared != self.steps.len() {
                return Err(CatalogError::StepCountMismatch {
                    recipe: self.name,
                    declared,
                    actual: self.steps.len(),
                });
            }
        }

        Ok(Recipe {
            name: self.name,
            ingredients_text: self.ingredients_text,
            image_ref: self.image_ref,
            difficulty: self.difficulty,
            cook_time_minutes: self.cook_time_minutes,
            calories: self.calories,
            servings: self.servings,
            vegetarian: self.vegetarian,
            lactose_free: self.lactose_free,
            gluten_free: self.gluten_free,
            steps: self.steps,
        })
    }
}

/// Recipe names compare with full Unicode lowercasing, so "Éclair" and
/// "éclair" are the same recipe.
fn same_name(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Immutable, ordered set of recipes with unique names.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    recipes: Vec<Arc<Recipe>>,
}

impl Catalog {
    pub fn new(recipes: impl IntoIterator<Item = Recipe>) -> Result<Self, CatalogError> {
        let mut out: Vec<Arc<Recipe>> = Vec::new();
        for recipe in recipes {
            if out.iter().any(|r| same_name(&r.name, &recipe.name)) {
                return Err(CatalogError::DuplicateRecipe(recipe.name));
            }
            out.push(Arc::new(recipe));
        }
        Ok(Self { recipes: out })
    }

    /// The recipes compiled into the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(data::builtin_recipes()?)
    }

    pub fn all(&self) -> &[Arc<Recipe>] {
        &self.recipes
    }

    pub fn names(&self) -> Vec<&str> {
        self.recipes.iter().map(|r| r.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Exact name lookup, ignoring case.
    pub fn find(&self, name: &str) -> Result<Arc<Recipe>, CatalogError> {
        let wanted = name.trim();
        self.recipes
            .iter()
            .find(|r| same_name(&r.name, wanted))
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(wanted.to_string()))
    }

    /// Resolve what the user said on the home page: an exact name, or a
    /// fragment that belongs to exactly one recipe ("pasta", "pizza").
    pub fn lookup(&self, spoken: &str) -> Result<Arc<Recipe>, CatalogError> {
        if let Ok(recipe) = self.find(spoken) {
            return Ok(recipe);
        }

        let query = spoken.trim().to_lowercase();
        if query.is_empty() {
            return Err(CatalogError::NotFound(String::new()));
        }

        let matches: Vec<&Arc<Recipe>> = self
            .recipes
            .iter()
            .filter(|r| r.name.to_lowercase().contains(&query))
            .collect();

        match matches.as_slice() {
            [] => Err(CatalogError::NotFound(spoken.trim().to_string())),
            [only] => Ok(Arc::clone(*only)),
            many => Err(CatalogError::Ambiguous {
                query: spoken.trim().to_string(),
                candidates: many.iter().map(|r| r.name.clone()).collect(),
            }),
        }
    }
}
