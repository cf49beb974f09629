//! Literal content of the HW 05-A expected-output sheet

/// One numbered demonstration and the lines it prints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub number: u8,
    pub title: &'static str,
    pub expected: &'static [&'static str],
}

/// The whole sheet, in print order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sheet {
    pub title: &'static str,
    pub instructions: &'static [&'static str],
    pub sections: &'static [Section],
}

pub const HW05A: Sheet = Sheet {
    title: "HW 05-A: Explanation of Python Multiple Assignments Code",
    instructions: &[
        "Look over and through the attached Python example code (the latter part) about multiple assignments.",
        "Then run and understand the outputs. Provide the explanation of that part of the given code.",
        "Do screen captures and save your submission in the PDF file format.",
    ],
    sections: &[
        Section {
            number: 1,
            title: "Assigning Multiple Variables in One Line",
            expected: &["1", "2", "3"],
        },
        Section {
            number: 2,
            title: "Swapping Variables",
            expected: &["20", "10"],
        },
        Section {
            number: 3,
            title: "Unpacking Iterables",
            expected: &["Jon", "30", "New York", "1 2 3", "X Y Z"],
        },
        Section {
            number: 4,
            title: "Using `*` for Extended Unpacking",
            expected: &["1", "[2, 3, 4]", "5"],
        },
        Section {
            number: 5,
            title: "Ignoring Unwanted Values",
            expected: &["1 3", "10 50"],
        },
        Section {
            number: 6,
            title: "Assigning Same Value to Multiple Variables",
            expected: &["100 100 100"],
        },
    ],
};
