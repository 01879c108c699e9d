use super::{banner_name, title_case};

/// `main.cpp`: prints a banner for the concept and a completion message.
pub fn main_cpp(concept: &str, description: &str) -> String {
    let banner = banner_name(concept);

    format!(
        r#"/**
 * @file main.cpp
 * @brief Demonstrates {concept}
 *
 * {description}
 */

#include <iostream>

int main() {{
    std::cout << "=== {banner} Demo ===" << std::endl;
    std::cout << std::endl;

    // TODO: Add your demonstration code here

    std::cout << std::endl;
    std::cout << "Demo completed successfully!" << std::endl;
    return 0;
}}
"#
    )
}

/// `CMakeLists.txt`: builds every `.cpp` in the directory into `<concept>_demo`.
pub fn cmake_lists(concept: &str) -> String {
    format!(
        r#"# CMakeLists.txt for {concept} concept

# Get the concept name from the directory
get_filename_component(CONCEPT_NAME ${{CMAKE_CURRENT_SOURCE_DIR}} NAME)

# Collect all .cpp files in this directory
file(GLOB CONCEPT_SOURCES "*.cpp")

# Create executable
add_executable(${{CONCEPT_NAME}}_demo ${{CONCEPT_SOURCES}})

# Set output directory to concepts/<concept_name>/
set_target_properties(${{CONCEPT_NAME}}_demo PROPERTIES
    RUNTIME_OUTPUT_DIRECTORY ${{CMAKE_BINARY_DIR}}/concepts/${{CONCEPT_NAME}}
)
"#
    )
}

/// `README.md`: title, overview and TODO sections for the concept.
pub fn readme(concept: &str, description: &str) -> String {
    let title = title_case(concept);
    let overview = if description.is_empty() {
        "TODO: Add concept description"
    } else {
        description
    };

    format!(
        r#"# {title}

## Overview
{overview}

## Learning Objectives
- TODO: Add learning objectives
- TODO: What should you understand after studying this?

## Key Concepts
- TODO: List key concepts covered
- TODO: Important terminology

## Code Structure
- `main.cpp` - Demonstration entry point
- TODO: List classes and their purposes

## Building

From project root:
```bash
mkdir -p build && cd build
cmake ..
make {concept}_demo
```

## Running

From build directory:
```bash
./concepts/{concept}/{concept}_demo
```

## Exercises

1. TODO: Add suggested exercises
2. TODO: Modifications to try
3. TODO: Extensions to implement

## Key Takeaways

- TODO: What are the main lessons?
- TODO: When to use this concept?
- TODO: Common pitfalls to avoid?

## References

- TODO: Add helpful links
- TODO: Recommended reading
- TODO: Related concepts
"#
    )
}
