use recipe_suggest::parse;

#[test]
fn test_empty_input_yields_no_records() {
    assert!(parse("").is_empty());
    assert!(parse("\n\n   \n").is_empty());
}

#[test]
fn test_one_record_per_heading_in_order() {
    let text = "## Shakshuka\n* eggs\n* tomatoes\n1. Simmer the sauce\n2. Poach the eggs\n\n\
                ## Spinach Frittata\n* eggs\n* spinach\n1. Bake\n\n\n\
                ## Egg Fried Rice\n* rice\n* eggs\n1. Fry everything";
    let records = parse(text);
    let titles: Vec<&str> = records.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Shakshuka", "Spinach Frittata", "Egg Fried Rice"]);
}

#[test]
fn test_parse_is_stable() {
    let text = "## A\n* x\n## B\n1. y\n## C\nfree text";
    assert_eq!(parse(text), parse(text));
}

#[test]
fn test_bullet_marker_is_stripped() {
    let records = parse("## Soup\nIngredients\n*   Salt  ");
    assert_eq!(records[0].ingredients, vec!["Salt"]);
}

#[test]
fn test_numbered_prefix_is_stripped() {
    let records = parse("## Bread\nInstructions\n2. Preheat oven");
    assert_eq!(records[0].instructions, vec!["Preheat oven"]);
}

#[test]
fn test_unclassifiable_block_falls_back_to_instructions() {
    let records = parse("## Toast\nPut bread in the toaster until golden");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].title, "Toast");
    assert!(records[0].ingredients.is_empty());
    assert_eq!(
        records[0].instructions,
        vec!["Put bread in the toaster until golden"]
    );
}

#[test]
fn test_response_without_headings_is_a_chef_note() {
    let text = "  Sorry, it's hard to make a full meal with just mustard and pickles!\n";
    let records = parse(text);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].title, "Note from Chef");
    assert!(records[0].ingredients.is_empty());
    assert_eq!(
        records[0].instructions,
        vec!["Sorry, it's hard to make a full meal with just mustard and pickles!"]
    );
}

#[test]
fn test_section_subheadings_fold_into_recipe() {
    let records =
        parse("## Soup\n## Ingredients\n* Water\n* Salt\n## Steps\n1. Boil water\n2. Add salt");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].title, "Soup");
    assert_eq!(records[0].ingredients, vec!["Water", "Salt"]);
    assert_eq!(records[0].instructions, vec!["Boil water", "Add salt"]);
}

#[test]
fn test_ingredients_without_bullets_and_instructions_without_numbers() {
    let text = "## Salad\nIngredients:\nlettuce\n* tomato\nInstructions:\nChop everything\n1. Toss with dressing";
    let records = parse(text);
    assert_eq!(records[0].ingredients, vec!["lettuce", "tomato"]);
    assert_eq!(
        records[0].instructions,
        vec!["Chop everything", "Toss with dressing"]
    );
}

#[test]
fn test_numbered_line_starts_instructions() {
    let records = parse("## Tea\n* water\n* tea bag\n1. Boil the water\n2. Steep");
    assert_eq!(records[0].ingredients, vec!["water", "tea bag"]);
    assert_eq!(records[0].instructions, vec!["Boil the water", "Steep"]);
}

#[test]
fn test_every_content_line_is_accounted_for() {
    let text = "## Pancakes\nFluffy and quick.\nIngredients\n* flour\n* milk\nSteps\n1. Mix\n2. Fry\nEnjoy!";
    let record = &parse(text)[0];
    assert_eq!(record.notes, vec!["Fluffy and quick."]);
    assert_eq!(record.ingredients, vec!["flour", "milk"]);
    assert_eq!(record.instructions, vec!["Mix", "Fry", "Enjoy!"]);

    // two section labels are consumed, everything else is kept
    let kept = record.notes.len() + record.ingredients.len() + record.instructions.len();
    let content_lines = text.lines().skip(1).filter(|l| !l.trim().is_empty()).count();
    assert_eq!(kept, content_lines - 2);
}

#[test]
fn test_step_label_with_number_is_kept() {
    let records = parse("## Stir Fry\n* noodles\n1. Step one: heat the wok\n2. Add noodles");
    assert_eq!(
        records[0].instructions,
        vec!["Step one: heat the wok", "Add noodles"]
    );
}

#[test]
fn test_crlf_line_endings() {
    let records = parse("## Soup\r\n* Water\r\n1. Boil\r\n");
    assert_eq!(records[0].title, "Soup");
    assert_eq!(records[0].ingredients, vec!["Water"]);
    assert_eq!(records[0].instructions, vec!["Boil"]);
}

#[test]
fn test_bare_double_hash_is_not_a_heading() {
    let records = parse("##\nJust add water and enjoy.");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].title, "Note from Chef");
    assert!(records[0].is_chef_note());
    assert_eq!(records[0].instructions, vec!["##\nJust add water and enjoy."]);
}

#[test]
fn test_trailing_empty_heading_still_counts() {
    let records = parse("Bring water to a boil.\n## ");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].title, "Untitled Recipe");
    assert_eq!(records[0].instructions, vec!["Bring water to a boil."]);
    assert_eq!(records[1].title, "Untitled Recipe");
    assert!(records[1].instructions.is_empty());
}

#[test]
fn test_bullet_before_any_label_starts_ingredients() {
    let records = parse("## Tea\n* water\n1. Boil");
    assert_eq!(records[0].ingredients, vec!["water"]);
    assert_eq!(records[0].instructions, vec!["Boil"]);
    assert!(records[0].notes.is_empty());
}
