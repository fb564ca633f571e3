use rand::Rng;
use rowrelax::{
    CsrView, MultiVector, MultiVectorMut, Parallelism, RowView, extract_diagonal,
    gauss_seidel_sweep, jacobi_sweep,
};

fn residual_norm(a: &CsrView<'_, f64, u32>, x: &[f64], b: &[f64]) -> f64 {
    let mut res: f64 = 0.0;
    for i in 0..a.num_rows() {
        let mut r = b[i];
        for (c, v) in a.row(i) {
            r -= v * x[c];
        }
        res = res.max(r.abs());
    }
    res
}

fn main() {
    // 1-D Poisson system: tridiag(-1, 2, -1), random right-hand side
    let n = 200;
    let mut offsets = vec![0usize];
    let mut inds = Vec::new();
    let mut vals = Vec::new();
    for i in 0..n {
        if i > 0 {
            inds.push((i - 1) as u32);
            vals.push(-1.0);
        }
        inds.push(i as u32);
        vals.push(2.0);
        if i + 1 < n {
            inds.push((i + 1) as u32);
            vals.push(-1.0);
        }
        offsets.push(inds.len());
    }
    let a = CsrView::try_new(&offsets, &inds, &vals).unwrap();

    let mut rng = rand::thread_rng();
    let b: Vec<f64> = (0..n).map(|_| rng.gen_range(-1.0..1.0)).collect();

    let mut diag = vec![0.0; n];
    extract_diagonal(a, &mut diag).unwrap();

    // damped Jacobi, ping-ponging between two iterates
    let omega = 0.8;
    let mut x0 = vec![0.0; n];
    let mut x = vec![0.0; n];
    for sweep in 1..=400 {
        jacobi_sweep(
            a,
            &diag,
            MultiVectorMut::from_column(&mut x),
            MultiVector::from_column(&x0),
            MultiVector::from_column(&b),
            omega,
            Parallelism::None,
        )
        .unwrap();
        std::mem::swap(&mut x0, &mut x);
        if sweep % 100 == 0 {
            println!(
                "jacobi       sweep {:4}: residual {:e}",
                sweep,
                residual_norm(&a, &x0, &b)
            );
        }
    }

    // Gauss-Seidel, in place
    let mut x = vec![0.0; n];
    for sweep in 1..=400 {
        gauss_seidel_sweep(
            a,
            &diag,
            MultiVectorMut::from_column(&mut x),
            MultiVector::from_column(&b),
            1.0,
            Parallelism::None,
        )
        .unwrap();
        if sweep % 100 == 0 {
            println!(
                "gauss-seidel sweep {:4}: residual {:e}",
                sweep,
                residual_norm(&a, &x, &b)
            );
        }
    }
}
