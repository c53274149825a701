/// Functions used throughout the library to assure correctness of packing runs.
pub mod assertions;
