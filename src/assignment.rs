//! Min-cost square assignment (Hungarian algorithm, potentials with
//! augmenting paths, O(n^3)). Self-contained leaf: takes a cost matrix,
//! returns the optimal total and the column picked for each row.

const INF: i64 = i64::MAX / 2;

/// Solve the square assignment problem on `cost` (rows x columns, square).
/// Returns `(total, assignment)` where `assignment[row] = column`.
pub fn min_cost_assignment(cost: &[Vec<usize>]) -> (usize, Vec<usize>) {
    let n = cost.len();
    if n == 0 {
        return (0, Vec::new());
    }
    debug_assert!(cost.iter().all(|row| row.len() == n));

    // 1-based arrays; row 0 and column 0 are sentinels.
    let mut row_potential = vec![0i64; n + 1];
    let mut col_potential = vec![0i64; n + 1];
    let mut matched_row = vec![0usize; n + 1]; // column -> row, 0 = free
    let mut way = vec![0usize; n + 1];

    for row in 1..=n {
        matched_row[0] = row;
        let mut j0 = 0usize;
        let mut min_slack = vec![INF; n + 1];
        let mut used = vec![false; n + 1];

        // Grow the alternating tree until a free column is reached.
        loop {
            used[j0] = true;
            let i0 = matched_row[j0];
            let mut delta = INF;
            let mut j1 = 0usize;

            for j in 1..=n {
                if used[j] {
                    continue;
                }
                let reduced = cost[i0 - 1][j - 1] as i64 - row_potential[i0] - col_potential[j];
                if reduced < min_slack[j] {
                    min_slack[j] = reduced;
                    way[j] = j0;
                }
                if min_slack[j] < delta {
                    delta = min_slack[j];
                    j1 = j;
                }
            }

            for j in 0..=n {
                if used[j] {
                    row_potential[matched_row[j]] += delta;
                    col_potential[j] -= delta;
                } else {
                    min_slack[j] -= delta;
                }
            }

            j0 = j1;
            if matched_row[j0] == 0 {
                break;
            }
        }

        // Flip the matching along the augmenting path.
        loop {
            let j1 = way[j0];
            matched_row[j0] = matched_row[j1];
            j0 = j1;
            if j0 == 0 {
                break;
            }
        }
    }

    let mut assignment = vec![0usize; n];
    let mut total = 0usize;
    for column in 1..=n {
        let row = matched_row[column];
        assignment[row - 1] = column - 1;
        total += cost[row - 1][column - 1];
    }
    (total, assignment)
}
