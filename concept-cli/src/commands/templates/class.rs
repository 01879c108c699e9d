use super::header_guard;

/// `<Class>.h`: include-guarded declaration with constructor and destructor.
///
/// With a base class the header includes `<Base>.h`, inherits publicly and
/// declares the destructor `virtual`.
pub fn header(class_name: &str, base_class: Option<&str>) -> String {
    let guard = header_guard(class_name);

    let (base_include, inheritance, virtual_keyword) = match base_class {
        Some(base) => (
            format!("#include \"{base}.h\"\n"),
            format!(" : public {base}"),
            "virtual ",
        ),
        None => (String::new(), String::new(), ""),
    };

    format!(
        r#"/**
 * @file {class_name}.h
 * @brief Declaration of {class_name} class
 */

#ifndef {guard}
#define {guard}

{base_include}
/**
 * @class {class_name}
 * @brief TODO: Add class description
 */
class {class_name}{inheritance} {{
public:
    /**
     * @brief Constructor
     */
    {class_name}();

    /**
     * @brief Destructor
     */
    {virtual_keyword}~{class_name}();

    // TODO: Add your public methods here

protected:
    // TODO: Add your protected members here

private:
    // TODO: Add your private members here
}};

#endif // {guard}
"#
    )
}

/// `<Class>.cpp`: constructor and destructor that print a lifecycle trace.
pub fn implementation(class_name: &str, base_class: Option<&str>) -> String {
    let base_init = base_class
        .map(|base| format!("\n    : {base}()"))
        .unwrap_or_default();

    format!(
        r#"/**
 * @file {class_name}.cpp
 * @brief Implementation of {class_name} class
 */

#include "{class_name}.h"
#include <iostream>

/**
 * @brief Constructor
 */
{class_name}::{class_name}(){base_init} {{
    std::cout << "{class_name} constructor called" << std::endl;
}}

/**
 * @brief Destructor
 */
{class_name}::~{class_name}() {{
    std::cout << "{class_name} destructor called" << std::endl;
}}

// TODO: Implement your methods here
"#
    )
}
