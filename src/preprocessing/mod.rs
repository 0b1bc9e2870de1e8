//! Polynomial feature expansion.
//!
//! Expands a raw feature vector into the monomial basis an external
//! polynomial trainer fitted its coefficients against. The enumeration
//! order is the contract: bias term first (iff requested), then all
//! degree-1 terms, then each higher degree's combinations-with-replacement
//! in lexicographic index order, so coefficient vectors align positionally.
//!
//! # Example
//!
//! ```
//! use inferir::preprocessing::expand;
//!
//! let expanded = expand(&[2.0, 3.0], 2, true, false).expect("degree >= 1");
//! assert_eq!(expanded, vec![1.0, 2.0, 3.0, 4.0, 6.0, 9.0]);
//! ```

use crate::error::{InferirError, Result};

/// Expands `x` into polynomial features up to `degree`.
///
/// Enumerates, in graded lexicographic order, all index combinations with
/// replacement of length `1..=degree`; each term is the product of the
/// selected inputs. A constant `1.0` is emitted first iff `include_bias`.
/// With `interaction_only`, any combination that repeats an index (a pure
/// power or a mixed term with a squared factor) is skipped outright, so
/// later positions shift left rather than zero out.
///
/// Output length for `n` features at degree `d` with bias and no
/// interaction restriction is `C(n + d, d)`.
///
/// # Errors
///
/// Returns a validation error if `degree < 1`.
pub fn expand(
    x: &[f64],
    degree: usize,
    include_bias: bool,
    interaction_only: bool,
) -> Result<Vec<f64>> {
    if degree < 1 {
        return Err(InferirError::validation(format!(
            "polynomial degree must be at least 1, got {degree}"
        )));
    }

    let n = x.len();
    let mut features = Vec::new();

    if include_bias {
        features.push(1.0);
    }

    // Degree-1 block: the raw features themselves.
    features.extend_from_slice(x);

    for d in 2..=degree {
        if n == 0 {
            break;
        }
        for_each_combination(n, d, |combo| {
            if interaction_only && has_repeated_index(combo) {
                return;
            }
            features.push(combo.iter().map(|&i| x[i]).product());
        });
    }

    Ok(features)
}

/// Builds the display names of the expanded features, in the same order
/// [`expand`] emits values.
///
/// The bias term is named `"1"`; pure powers render as `name^d` and mixed
/// terms join their factors with `*`, e.g. `["age", "bmi"]` at degree 2
/// gives `["1", "age", "bmi", "age^2", "age*bmi", "bmi^2"]`.
///
/// # Errors
///
/// Returns a validation error if `degree < 1`.
pub fn expanded_feature_names(
    names: &[String],
    degree: usize,
    include_bias: bool,
    interaction_only: bool,
) -> Result<Vec<String>> {
    if degree < 1 {
        return Err(InferirError::validation(format!(
            "polynomial degree must be at least 1, got {degree}"
        )));
    }

    let n = names.len();
    let mut out = Vec::new();

    if include_bias {
        out.push("1".to_string());
    }

    out.extend(names.iter().cloned());

    for d in 2..=degree {
        if n == 0 {
            break;
        }
        for_each_combination(n, d, |combo| {
            if interaction_only && has_repeated_index(combo) {
                return;
            }
            if combo.iter().all(|&i| i == combo[0]) {
                out.push(format!("{}^{d}", names[combo[0]]));
            } else {
                let parts: Vec<&str> = combo.iter().map(|&i| names[i].as_str()).collect();
                out.push(parts.join("*"));
            }
        });
    }

    Ok(out)
}

/// Number of features [`expand`] produces for `n` inputs.
///
/// Closed form over binomials: `C(n + k - 1, k)` terms at degree `k`
/// (`C(n, k)` under `interaction_only`), summed for `k = 1..=degree`,
/// plus one for the bias.
#[must_use]
pub fn expanded_len(n: usize, degree: usize, include_bias: bool, interaction_only: bool) -> usize {
    let mut len = usize::from(include_bias);
    for k in 1..=degree {
        len += if interaction_only {
            binomial(n, k)
        } else {
            binomial(n + k - 1, k)
        };
    }
    len
}

/// Visits every non-decreasing index tuple of length `d` over `0..n`, in
/// lexicographic order. Non-decreasing tuples are exactly the
/// combinations-with-replacement of the index set.
fn for_each_combination(n: usize, d: usize, mut visit: impl FnMut(&[usize])) {
    debug_assert!(n > 0 && d > 0);
    let mut combo = vec![0usize; d];
    loop {
        visit(&combo);

        // Advance: bump the rightmost position still below n-1, then reset
        // everything after it to the bumped value to keep the tuple
        // non-decreasing.
        let mut pos = d;
        while pos > 0 {
            if combo[pos - 1] < n - 1 {
                break;
            }
            pos -= 1;
        }
        if pos == 0 {
            return;
        }
        let bumped = combo[pos - 1] + 1;
        for slot in combo.iter_mut().skip(pos - 1) {
            *slot = bumped;
        }
    }
}

fn has_repeated_index(combo: &[usize]) -> bool {
    // Tuples are non-decreasing, so a repeat is always adjacent.
    combo.windows(2).any(|w| w[0] == w[1])
}

fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut result: usize = 1;
    for i in 0..k {
        result = result * (n - i) / (i + 1);
    }
    result
}
