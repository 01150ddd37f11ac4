use crate::Route;
use yew::prelude::*;
use yew_router::components::Link;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p>{"Esta página no existe."}</p>
            <Link<Route> to={Route::Home} classes={classes!("btn-primary")}>{"Volver al inicio"}</Link<Route>>
            <style>
                {r#"
                .not-found {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1.5rem;
                    background: #000;
                    color: #fff;
                    font-family: 'Inter', sans-serif;
                }
                .not-found h1 {
                    font-family: 'Orbitron', sans-serif;
                    font-size: 6rem;
                    color: #00ff9c;
                    margin: 0;
                }
                "#}
            </style>
        </div>
    }
}
