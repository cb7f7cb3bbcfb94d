use super::{CatalogError, Difficulty, Recipe, RecipeStep};

const TOMATO_PASTA_GATHER: &str = "\
Let’s gather all the ingredients and place them on a clean, accessible table. \
When you’re ready with everything on the table, say ‘ready.’

Ingredients:
• Olive oil
• Garlic
• Canned tomato sauce
• Salt
• Pepper
• Fresh basil leaves (optional)
• Pasta (spaghetti, penne, or your choice)
• Grated Parmesan or Pecorino cheese (optional)";

const PIZZA_GATHER: &str = "\
Let’s gather all the ingredients and place them on a clean, accessible table. \
When you’re ready with everything on the table, say ‘ready.’

Ingredients:
• 2 Heck 97% Sausages
• 1 260g Neapolitan Dough ball
• 80g Fior Di Latte Mozzarella
• 10g Smoked Mozzarella (scamorza)
• A pinch of grated Hard Cheese
• 2 handfuls of cooked Friarielli";

const PEEL_TOMATOES: &str = "\
Place tomatoes in a large pot and cover with cold water. Bring just to a boil. \
Pour off water, and cover again with cold water. Peel the skin off tomatoes and \
cut into small pieces.";

const COOK_PASTA_TIMED: &str = "\
For this step we need a timer, so you can see how long it takes to cook the pasta. \
Say 'START' when you're ready to cook the pasta.";

const SIMMER_SAUCE: &str = "\
Meanwhile, heat olive oil in a large skillet or pan, ensuring there is enough to \
cover the bottom of the pan. Sauté garlic until opaque but not browned. Stir in \
tomato paste. Immediately stir in the tomatoes, salt, and pepper. Reduce heat, and \
simmer until pasta is ready, adding basil at the end.";

const COMBINE: &str = "\
Drain pasta; do not rinse in cold water. Toss with a bit of olive oil, then mix \
into the sauce.";

/// The recipes shipped with the app, in display order.
pub(super) fn builtin_recipes() -> Result<Vec<Recipe>, CatalogError> {
    let tomato_pasta = Recipe::builder("Tomato Pasta")
        .ingredients(
            "80g pennette pasta, 150g fresh tomatos, 1 tablespoon of olive oil, \
             1 garlic clove, 2 pinches of salt, few basil leaves, grated parmesan cheese",
        )
        .number_of_steps(4)
        .image("pasta")
        .difficulty(Difficulty::Easy)
        .cook_time_minutes(20)
        .calories(500)
        .servings(1)
        .vegetarian(true)
        .steps([
            RecipeStep::new("1. Preparare la pasta", "pasta", TOMATO_PASTA_GATHER),
            RecipeStep::new("2. Preparare le patate", "patate", PEEL_TOMATOES),
            RecipeStep::new("3. Cuocere la pasta", "pasta", COOK_PASTA_TIMED).with_timer(30),
            RecipeStep::new("4. Combinare la pasta e la salsa", "pasta", COMBINE),
        ])
        .build()?;

    let pizza = Recipe::builder("Pizza Salsiccia e Friarielli")
        .ingredients("salsiccia, friarielli")
        .number_of_steps(4)
        .image("pizza")
        .difficulty(Difficulty::Medium)
        .cook_time_minutes(8)
        .gluten_free(true)
        .steps([
            RecipeStep::new("1. Preparare la pasta", "pasta", PIZZA_GATHER),
            RecipeStep::new("2. Preparare le patate", "patate", PEEL_TOMATOES),
            RecipeStep::new("3. Cuocere la pasta", "pasta", SIMMER_SAUCE),
            RecipeStep::new("4. Combinare la pasta e la salsa", "pasta", COMBINE),
        ])
        .build()?;

    Ok(vec![tomato_pasta, pizza])
}
