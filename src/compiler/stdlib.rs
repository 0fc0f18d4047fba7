//! C runtime support for generated programs.
//!
//! Every program starts with the same preamble. The string helpers are
//! only emitted when the program needs them, as `static` functions ahead
//! of `main`, so the output never depends on a support library.

use super::compiler::OutputSink;

const PREAMBLE: &str = "#define _POSIX_C_SOURCE 200809L
#include <stdio.h>
#include <stdlib.h>
#include <string.h>
";

/// Joins two strings into fresh storage, freeing the operands it owns.
const CONCAT_HELPER: &str = "static char *btoc_concat(char *left, int owns_left, char *right, int owns_right) {
    size_t left_len = strlen(left);
    size_t right_len = strlen(right);
    char *result = malloc(left_len + right_len + 1);
    if (result == NULL) {
        exit(1);
    }
    memcpy(result, left, left_len);
    memcpy(result + left_len, right, right_len + 1);
    if (owns_left) {
        free(left);
    }
    if (owns_right) {
        free(right);
    }
    return result;
}
";

/// `strcmp` that frees the operands it owns.
const COMPARE_HELPER: &str = "static int btoc_compare(char *left, int owns_left, char *right, int owns_right) {
    int result = strcmp(left, right);
    if (owns_left) {
        free(left);
    }
    if (owns_right) {
        free(right);
    }
    return result;
}
";

pub fn emit_preamble(output: &mut OutputSink) {
    output.emit_header(PREAMBLE);
    output.emit_header_line("");
}

pub fn emit_helpers(output: &mut OutputSink, uses_concat: bool, uses_compare: bool) {
    if uses_concat {
        output.emit_header(CONCAT_HELPER);
        output.emit_header_line("");
    }

    if uses_compare {
        output.emit_header(COMPARE_HELPER);
        output.emit_header_line("");
    }
}
