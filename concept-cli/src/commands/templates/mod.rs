pub mod class;
pub mod concept;

/// Include-guard macro for a class header: `Animal` → `ANIMAL_H`.
pub fn header_guard(class_name: &str) -> String {
    format!("{}_H", class_name.to_uppercase())
}

/// Banner text for a concept's demo: `operator_overloading` → `OPERATOR OVERLOADING`.
pub fn banner_name(concept: &str) -> String {
    concept.to_uppercase().replace('_', " ")
}

/// Document title for a concept: `operator_overloading` → `Operator Overloading`.
///
/// A letter is uppercased when it follows a non-letter (or starts the
/// string) and lowercased otherwise, so `raii2go` becomes `Raii2Go`.
pub fn title_case(concept: &str) -> String {
    let spaced = concept.replace('_', " ");
    let mut result = String::with_capacity(spaced.len());
    let mut after_letter = false;
    for c in spaced.chars() {
        if c.is_alphabetic() {
            if after_letter {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            after_letter = true;
        } else {
            result.push(c);
            after_letter = false;
        }
    }
    result
}
